use gtk4::prelude::{
    AdjustmentExt, ApplicationExt, BoxExt, ButtonExt, Cast, GtkWindowExt, ObjectExt,
    OrientableExt, WidgetExt,
};
use relm4::adw::prelude::AnimationExt;
use relm4::{
    adw, gtk, main_application, Component, ComponentController, ComponentParts,
    ComponentSender, Controller,
};

use gtk4::glib;

use crate::content;
use crate::reveal::ScrollState;
use crate::ui;
use crate::ui::hero::HeroModel;
use crate::ui::journey::{JourneyModel, JourneyMsg, WidthClass};
use crate::ui::projects::ProjectsModel;
use crate::ui::skills::SkillsModel;

/// Vertical line (px below the viewport top) a section must span to count
/// as the active one in the navigation bar.
const ACTIVE_LINE: f64 = 100.0;

pub const APP_CSS: &str = "
window { background-color: #0b1120; color: #e2e8f0; }
scrolledwindow, viewport { background-color: transparent; }
headerbar { background-color: rgba(15, 23, 42, 0.85); }
.nav-link { color: #cbd5e1; font-weight: 600; }
.nav-link.nav-active { color: #22d3ee; }
.hero-name { font-size: 42px; font-weight: 800; color: #67e8f9; }
.hero-tagline { font-size: 18px; color: #cbd5e1; }
.section-title { font-size: 28px; font-weight: 700; color: #22d3ee; }
.muted { color: #94a3b8; }
.dim { color: #64748b; font-size: 12px; }
.card { background-color: #0f172a; border: 1px solid #334155; border-radius: 12px; padding: 16px; }
.card.edu { border-left: 3px solid #a855f7; }
.card.work { border-left: 3px solid #22d3ee; }
.card-title { font-size: 16px; font-weight: 700; color: #f8fafc; }
.card-body { color: #cbd5e1; font-size: 13px; }
.chip { background-color: rgba(34, 211, 238, 0.08); border: 1px solid rgba(34, 211, 238, 0.3); color: #22d3ee; border-radius: 999px; padding: 2px 10px; font-size: 11px; }
.skill-chip { background-color: rgba(30, 41, 59, 0.8); border: 1px solid #334155; color: #cbd5e1; border-radius: 8px; padding: 8px 14px; }
.banner { background-color: #1e293b; }
.banner-gradient { background: linear-gradient(135deg, #9333ea, #ec4899, #fb7185); }
.project-card { padding: 0px; }
.dot { min-width: 10px; min-height: 10px; border-radius: 999px; background-color: #475569; padding: 0px; }
.dot.active { background-color: #22d3ee; }
.gallery { background-color: #020617; }
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Journey,
    Skills,
    Projects,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Journey,
        Section::Skills,
        Section::Projects,
    ];

    fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Journey => "Journey",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
        }
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(Section::Home),
            "journey" => Ok(Section::Journey),
            "skills" => Ok(Section::Skills),
            "projects" => Ok(Section::Projects),
            other => Err(format!(
                "unknown section '{other}' (expected home, journey, skills or projects)"
            )),
        }
    }
}

/// Startup options, parsed from the command line in `main`.
#[derive(Debug, Clone, Copy)]
pub struct Launch {
    pub section: Option<Section>,
    pub width: i32,
    pub height: i32,
}

/// Returns the index of the first span containing `line`.
fn section_at(line: f64, spans: &[(f64, f64)]) -> Option<usize> {
    spans
        .iter()
        .position(|(top, bottom)| *top <= line && *bottom >= line)
}

pub struct App {
    hero: Controller<HeroModel>,
    journey: Controller<JourneyModel>,
    skills: Controller<SkillsModel>,
    projects: Controller<ProjectsModel>,
    nav_buttons: Vec<(Section, gtk::Button)>,
    active: Section,
    width_class: WidthClass,
    pending_jump: Option<Section>,
    scroll_hooks: Vec<(glib::Object, glib::SignalHandlerId)>,
    scroll_animation: Option<adw::TimedAnimation>,
}

#[derive(Debug)]
pub enum AppMsg {
    /// Scroll position or layout changed; resample geometry.
    Scrolled,
    JumpTo(Section),
    Quit,
}

#[relm4::component(pub)]
impl Component for App {
    type CommandOutput = ();
    type Input = AppMsg;
    type Output = ();
    type Init = Launch;

    view! {
        main_window = adw::ApplicationWindow::new(&main_application()) {
            set_visible: true,
            set_title: Some(content::PROFILE.name),

            connect_close_request[sender] => move |_| {
                sender.input(AppMsg::Quit);
                glib::Propagation::Stop
            },

            adw::ToolbarView {
                add_top_bar = &adw::HeaderBar {
                    #[wrap(Some)]
                    set_title_widget: nav_box = &gtk::Box {
                        set_spacing: 4,
                    },
                },

                #[wrap(Some)]
                set_content: overlay = &gtk::Overlay {
                    #[wrap(Some)]
                    set_child: backdrop = &ui::Backdrop::default() {
                        set_hexpand: true,
                        set_vexpand: true,
                    },

                    add_overlay: scroller = &gtk::ScrolledWindow {
                        set_hscrollbar_policy: gtk::PolicyType::Never,
                        set_hexpand: true,
                        set_vexpand: true,

                        #[wrap(Some)]
                        set_child: column = &gtk::Box {
                            set_orientation: gtk::Orientation::Vertical,
                            set_margin_start: 32,
                            set_margin_end: 32,
                        },
                    },
                },
            }
        }
    }

    fn init(
        launch: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let hero = HeroModel::builder().launch(()).detach();
        let journey = JourneyModel::builder().launch(content::TIMELINE).detach();
        let skills = SkillsModel::builder().launch(content::SKILL_GROUPS).detach();
        let projects = ProjectsModel::builder().launch(content::PROJECTS).detach();

        let mut model = App {
            hero,
            journey,
            skills,
            projects,
            nav_buttons: Vec::new(),
            active: Section::Home,
            width_class: WidthClass::default(),
            pending_jump: launch.section,
            scroll_hooks: Vec::new(),
            scroll_animation: None,
        };

        let widgets = view_output!();

        widgets
            .main_window
            .set_default_size(launch.width, launch.height);

        widgets.column.append(model.hero.widget());
        widgets.column.append(model.journey.widget());
        widgets.column.append(model.skills.widget());
        widgets.column.append(model.projects.widget());
        widgets.column.append(&footer());

        for section in Section::ALL {
            let button = gtk::Button::with_label(section.label());
            button.add_css_class("flat");
            button.add_css_class("nav-link");
            let sender = sender.clone();
            button.connect_clicked(move |_| sender.input(AppMsg::JumpTo(section)));
            widgets.nav_box.append(&button);
            model.nav_buttons.push((section, button));
        }
        model.sync_nav();

        // Scroll and layout signals both feed the same resample path. The
        // hooks are disconnected in shutdown so no callback outlives the
        // component.
        let adjustment = widgets.scroller.vadjustment();
        let s = sender.clone();
        let id = adjustment.connect_value_changed(move |_| s.input(AppMsg::Scrolled));
        model
            .scroll_hooks
            .push((adjustment.clone().upcast::<glib::Object>(), id));
        let s = sender.clone();
        let id = adjustment.connect_changed(move |_| s.input(AppMsg::Scrolled));
        model
            .scroll_hooks
            .push((adjustment.clone().upcast::<glib::Object>(), id));
        // Eager first sample once the window is mapped, before any scroll.
        let s = sender.clone();
        let id = widgets.scroller.connect_map(move |_| s.input(AppMsg::Scrolled));
        model
            .scroll_hooks
            .push((widgets.scroller.clone().upcast::<glib::Object>(), id));

        let motion = gtk::EventControllerMotion::new();
        let backdrop = widgets.backdrop.clone();
        motion.connect_motion(move |_, x, y| backdrop.set_pointer_target(x, y));
        widgets.overlay.add_controller(motion);

        ComponentParts { model, widgets }
    }

    fn update_with_view(
        &mut self,
        widgets: &mut Self::Widgets,
        message: Self::Input,
        sender: ComponentSender<Self>,
        _root: &Self::Root,
    ) {
        match message {
            AppMsg::Scrolled => {
                let viewport_height = widgets.scroller.height() as f64;
                if viewport_height <= 0.0 {
                    return;
                }

                let class = WidthClass::from_width(widgets.scroller.width());
                if class != self.width_class {
                    self.width_class = class;
                    self.journey.emit(JourneyMsg::WidthChanged(class));
                }

                if let Some(bounds) = self.journey.widget().compute_bounds(&widgets.scroller) {
                    self.journey.emit(JourneyMsg::Viewed(ScrollState::new(
                        bounds.y() as f64,
                        bounds.height() as f64,
                        viewport_height,
                    )));
                }

                let spans: Vec<(f64, f64)> = Section::ALL
                    .iter()
                    .map(|section| {
                        self.section_widget(*section)
                            .compute_bounds(&widgets.scroller)
                            .map(|b| (b.y() as f64, (b.y() + b.height()) as f64))
                            .unwrap_or((f64::MAX, f64::MAX))
                    })
                    .collect();
                if let Some(index) = section_at(ACTIVE_LINE, &spans) {
                    let section = Section::ALL[index];
                    if section != self.active {
                        tracing::debug!(?section, "active section changed");
                        self.active = section;
                        self.sync_nav();
                    }
                }

                // Deferred --section jump, now that geometry exists.
                if let Some(section) = self.pending_jump.take() {
                    sender.input(AppMsg::JumpTo(section));
                }
            }
            AppMsg::JumpTo(section) => {
                let adjustment = widgets.scroller.vadjustment();
                if let Some(bounds) =
                    self.section_widget(section).compute_bounds(&widgets.column)
                {
                    let max =
                        (adjustment.upper() - adjustment.page_size()).max(adjustment.lower());
                    let to = (bounds.y() as f64 - 16.0).clamp(adjustment.lower(), max);
                    let target = adw::CallbackAnimationTarget::new({
                        let adjustment = adjustment.clone();
                        move |value| adjustment.set_value(value)
                    });
                    let animation = adw::TimedAnimation::builder()
                        .widget(&widgets.scroller)
                        .value_from(adjustment.value())
                        .value_to(to)
                        .duration(500)
                        .target(&target)
                        .easing(adw::Easing::EaseOutCubic)
                        .build();
                    animation.play();
                    self.scroll_animation = Some(animation);
                }
            }
            AppMsg::Quit => main_application().quit(),
        }
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        for (object, id) in self.scroll_hooks.drain(..) {
            object.disconnect(id);
        }
        tracing::debug!("scroll hooks disconnected");
    }
}

impl App {
    fn section_widget(&self, section: Section) -> gtk::Widget {
        match section {
            Section::Home => self.hero.widget().clone().upcast(),
            Section::Journey => self.journey.widget().clone().upcast(),
            Section::Skills => self.skills.widget().clone().upcast(),
            Section::Projects => self.projects.widget().clone().upcast(),
        }
    }

    fn sync_nav(&self) {
        for (section, button) in &self.nav_buttons {
            if *section == self.active {
                button.add_css_class("nav-active");
            } else {
                button.remove_css_class("nav-active");
            }
        }
    }
}

fn footer() -> gtk::Box {
    let footer = gtk::Box::new(gtk::Orientation::Vertical, 6);
    footer.set_margin_top(40);
    footer.set_margin_bottom(48);
    footer.set_halign(gtk::Align::Center);

    let headline = gtk::Label::new(Some("Let's create something amazing"));
    headline.add_css_class("card-title");
    footer.append(&headline);

    let copyright = gtk::Label::new(Some("© 2026 Maya Calder"));
    copyright.add_css_class("dim");
    footer.append(&copyright);

    footer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_at_picks_the_span_over_the_line() {
        let spans = [(0.0, 90.0), (90.0, 600.0), (600.0, 1200.0)];
        assert_eq!(section_at(100.0, &spans), Some(1));
        assert_eq!(section_at(50.0, &spans), Some(0));
        assert_eq!(section_at(700.0, &spans), Some(2));
    }

    #[test]
    fn section_at_handles_gaps() {
        let spans = [(-500.0, -100.0), (200.0, 400.0)];
        assert_eq!(section_at(100.0, &spans), None);
    }

    #[test]
    fn section_names_parse() {
        assert_eq!("journey".parse::<Section>(), Ok(Section::Journey));
        assert_eq!("SKILLS".parse::<Section>(), Ok(Section::Skills));
        assert!("about".parse::<Section>().is_err());
    }
}
