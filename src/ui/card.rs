use std::cell::Cell;

use gtk4::prelude::{SnapshotExt, WidgetExt};
use gtk4::subclass::prelude::*;
use gtk4::{glib, graphene, Snapshot};
use relm4::gtk;

/// Single-child container that renders its content through the reveal
/// transition: a vertical offset and a blur applied at draw time, so the
/// transition never disturbs layout.
#[derive(Default)]
pub struct RevealCard {
    pub(super) blur: Cell<f64>,
    pub(super) rise: Cell<f64>,
}

#[glib::object_subclass]
impl ObjectSubclass for RevealCard {
    const NAME: &'static str = "RevealCard";
    type Type = super::RevealCard;
    type ParentType = gtk::Widget;

    fn class_init(klass: &mut Self::Class) {
        klass.set_layout_manager_type::<gtk::BinLayout>();
    }
}

impl ObjectImpl for RevealCard {
    fn dispose(&self) {
        while let Some(child) = self.obj().first_child() {
            child.unparent();
        }
    }
}

impl WidgetImpl for RevealCard {
    fn snapshot(&self, snapshot: &Snapshot) {
        let widget = self.obj();
        let blur = self.blur.get();

        snapshot.save();
        snapshot.translate(&graphene::Point::new(0.0, self.rise.get() as f32));
        if blur > 0.0 {
            snapshot.push_blur(blur);
        }
        if let Some(child) = widget.first_child() {
            widget.snapshot_child(&child, snapshot);
        }
        if blur > 0.0 {
            snapshot.pop();
        }
        snapshot.restore();
    }
}
