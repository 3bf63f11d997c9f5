use std::cell::Cell;

use gtk4::prelude::{SnapshotExt, WidgetExt};
use gtk4::subclass::prelude::*;
use gtk4::{gdk, glib, graphene, gsk, Snapshot};
use relm4::gtk;

use crate::motion::{sine_drift, Follower};

const DRIFT_AMPLITUDE: f64 = 80.0;
const FOLLOW_RATE: f64 = 0.004;
const GRID_STEP: f32 = 50.0;

struct Orb {
    rel_x: f32,
    rel_y: f32,
    radius: f32,
    rgba: (f32, f32, f32, f32),
    drift: f64,
    parallax: f64,
}

const ORBS: [Orb; 3] = [
    // Blue, bottom left, riding the sine drift.
    Orb {
        rel_x: 0.08,
        rel_y: 0.92,
        radius: 260.0,
        rgba: (0.23, 0.51, 0.96, 0.16),
        drift: 1.0,
        parallax: 0.02,
    },
    // Cyan, top right, counter-phase drift.
    Orb {
        rel_x: 0.92,
        rel_y: 0.10,
        radius: 260.0,
        rgba: (0.13, 0.83, 0.93, 0.16),
        drift: -1.0,
        parallax: -0.01,
    },
    // Purple, center, pointer parallax only.
    Orb {
        rel_x: 0.5,
        rel_y: 0.5,
        radius: 210.0,
        rgba: (0.66, 0.33, 0.97, 0.10),
        drift: 0.0,
        parallax: 0.015,
    },
];

/// Full-window decoration: blurred gradient orbs over a faint grid. Runs
/// two independent frame-clock motions (sine drift, smoothed pointer
/// parallax) and never takes pointer input.
pub struct Backdrop {
    start_us: Cell<i64>,
    last_us: Cell<i64>,
    drift: Cell<f64>,
    target: Cell<(f64, f64)>,
    follower: Cell<Follower>,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            start_us: Cell::new(0),
            last_us: Cell::new(0),
            drift: Cell::new(0.0),
            target: Cell::new((0.0, 0.0)),
            follower: Cell::new(Follower::new(FOLLOW_RATE)),
        }
    }
}

#[glib::object_subclass]
impl ObjectSubclass for Backdrop {
    const NAME: &'static str = "Backdrop";
    type Type = super::Backdrop;
    type ParentType = gtk::Widget;
}

impl ObjectImpl for Backdrop {
    fn constructed(&self) {
        self.parent_constructed();

        let widget = self.obj();
        widget.set_can_target(false);
        widget.add_tick_callback(|widget, clock| {
            widget.imp().advance(clock.frame_time());
            widget.queue_draw();
            glib::ControlFlow::Continue
        });
    }
}

impl WidgetImpl for Backdrop {
    fn snapshot(&self, snapshot: &Snapshot) {
        let widget = self.obj();
        let width = widget.width() as f32;
        let height = widget.height() as f32;
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        self.draw_grid(snapshot, width, height);

        let drift = self.drift.get();
        let follower = self.follower.get();

        for orb in &ORBS {
            let cx = width * orb.rel_x + (follower.x * orb.parallax) as f32;
            let cy =
                height * orb.rel_y + (drift * orb.drift + follower.y * orb.parallax) as f32;
            let (r, g, b, a) = orb.rgba;

            snapshot.append_radial_gradient(
                &graphene::Rect::new(
                    cx - orb.radius,
                    cy - orb.radius,
                    orb.radius * 2.0,
                    orb.radius * 2.0,
                ),
                &graphene::Point::new(cx, cy),
                orb.radius,
                orb.radius,
                0.0,
                1.0,
                &[
                    gsk::ColorStop::new(0.0, gdk::RGBA::new(r, g, b, a)),
                    gsk::ColorStop::new(1.0, gdk::RGBA::new(r, g, b, 0.0)),
                ],
            );
        }
    }
}

impl Backdrop {
    pub(super) fn set_target(&self, x: f64, y: f64) {
        self.target.set((x, y));
    }

    fn advance(&self, frame_time_us: i64) {
        if self.start_us.get() == 0 {
            self.start_us.set(frame_time_us);
            self.last_us.set(frame_time_us);
        }
        let elapsed_ms = (frame_time_us - self.start_us.get()) as f64 / 1000.0;
        let dt_ms = (frame_time_us - self.last_us.get()) as f64 / 1000.0;
        self.last_us.set(frame_time_us);

        self.drift.set(sine_drift(elapsed_ms, DRIFT_AMPLITUDE));

        let (tx, ty) = self.target.get();
        let mut follower = self.follower.get();
        follower.step_toward(tx, ty, dt_ms);
        self.follower.set(follower);
    }

    fn draw_grid(&self, snapshot: &Snapshot, width: f32, height: f32) {
        let path_builder = gsk::PathBuilder::new();

        let mut x = GRID_STEP;
        while x < width {
            path_builder.move_to(x, 0.0);
            path_builder.line_to(x, height);
            x += GRID_STEP;
        }
        let mut y = GRID_STEP;
        while y < height {
            path_builder.move_to(0.0, y);
            path_builder.line_to(width, y);
            y += GRID_STEP;
        }

        let stroke = gsk::Stroke::builder(1.0).build();
        snapshot.append_stroke(
            &path_builder.to_path(),
            &stroke,
            &gdk::RGBA::new(0.23, 0.51, 0.96, 0.05),
        );
    }
}
