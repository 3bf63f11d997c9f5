use gtk4::prelude::{BoxExt, FlowBoxChildExt, OrientableExt, WidgetExt};
use relm4::{adw, gtk, ComponentParts, ComponentSender, SimpleComponent};

use crate::content::SkillGroup;

pub struct SkillsModel;

#[relm4::component(pub)]
impl SimpleComponent for SkillsModel {
    type Input = ();
    type Output = ();
    type Init = &'static [SkillGroup];

    view! {
        gtk::Box {
            set_orientation: gtk::Orientation::Vertical,
            set_spacing: 8,
            set_margin_top: 80,
            set_margin_bottom: 80,

            gtk::Label {
                set_label: "Skills & Expertise",
                add_css_class: "section-title",
                set_halign: gtk::Align::Center,
            },

            gtk::Label {
                set_label: "Technologies I use to build enterprise-grade applications",
                add_css_class: "muted",
                set_halign: gtk::Align::Center,
                set_margin_bottom: 16,
            },

            #[name = "switcher"]
            adw::ViewSwitcher {
                set_policy: adw::ViewSwitcherPolicy::Wide,
                set_halign: gtk::Align::Center,
            },

            #[name = "stack"]
            adw::ViewStack {
                set_margin_top: 16,
                set_halign: gtk::Align::Center,
            },
        }
    }

    fn init(
        groups: Self::Init,
        root: Self::Root,
        _sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = SkillsModel;
        let widgets = view_output!();

        for group in groups {
            widgets.stack.add_titled_with_icon(
                &group_grid(group),
                Some(group.name),
                group.title,
                group.icon,
            );
        }
        widgets.switcher.set_stack(Some(&widgets.stack));

        ComponentParts { model, widgets }
    }
}

fn group_grid(group: &SkillGroup) -> gtk::FlowBox {
    let grid = gtk::FlowBox::new();
    grid.set_selection_mode(gtk::SelectionMode::None);
    grid.set_column_spacing(10);
    grid.set_row_spacing(10);
    grid.set_min_children_per_line(2);
    grid.set_max_children_per_line(3);
    grid.set_width_request(620);

    for skill in group.skills {
        let chip = gtk::Label::new(Some(skill));
        chip.add_css_class("skill-chip");
        let child = gtk::FlowBoxChild::new();
        child.set_child(Some(&chip));
        child.set_focusable(false);
        grid.insert(&child, -1);
    }

    grid
}
