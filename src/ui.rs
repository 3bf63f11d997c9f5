use gtk4::glib;
use gtk4::prelude::{IsA, WidgetExt};
use gtk4::subclass::prelude::ObjectSubclassIsExt;

mod backdrop;
mod card;
pub mod gallery;
pub mod hero;
pub mod journey;
pub mod projects;
pub mod skills;

glib::wrapper! {
    pub struct Backdrop(ObjectSubclass<backdrop::Backdrop>)
        @extends gtk4::Widget;
}

impl Default for Backdrop {
    fn default() -> Self {
        glib::Object::builder().build()
    }
}

impl Backdrop {
    /// Pointer position in widget coordinates; the orbs drift toward it
    /// with per-orb parallax factors.
    pub(crate) fn set_pointer_target(&self, x: f64, y: f64) {
        self.imp().set_target(x, y);
    }
}

glib::wrapper! {
    pub struct RevealCard(ObjectSubclass<card::RevealCard>)
        @extends gtk4::Widget;
}

impl RevealCard {
    /// Wraps `child` in a reveal container that starts hidden.
    pub(crate) fn new(child: &impl IsA<gtk4::Widget>) -> Self {
        let card: Self = glib::Object::builder().build();
        child.set_parent(&card);
        card.set_hidden(true);
        card
    }

    /// Hidden cards are dimmed, blurred, pushed down, and reject pointer
    /// input so not-yet-revealed content cannot be interacted with.
    pub(crate) fn set_hidden(&self, hidden: bool) {
        let (opacity, blur, rise) = if hidden {
            (0.15, 6.0, 36.0)
        } else {
            (1.0, 0.0, 0.0)
        };
        self.set_opacity(opacity);
        self.set_can_target(!hidden);
        self.imp().blur.set(blur);
        self.imp().rise.set(rise);
        self.queue_draw();
    }
}
