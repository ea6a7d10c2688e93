// src/app/ui.rs — egui painters for the screen chrome, the list and its cards
mod card;
mod list;
mod navbar;
mod topbar;

pub(crate) const NAV_BAR_HEIGHT: f32 = 56.0;
