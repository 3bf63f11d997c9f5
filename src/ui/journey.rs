use gtk4::prelude::{BoxExt, FlowBoxChildExt, OrientableExt, WidgetExt};
use relm4::{gtk, ComponentParts, ComponentSender, SimpleComponent};

use crate::content::{Category, TimelineEntry};
use crate::reveal::{revealed_count, ScrollState};
use crate::ui::RevealCard;

/// Coarse viewport width bucket; only the timeline layout cares about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthClass {
    #[default]
    Wide,
    Narrow,
}

impl WidthClass {
    pub fn from_width(px: i32) -> Self {
        if px < 760 {
            WidthClass::Narrow
        } else {
            WidthClass::Wide
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Start,
    End,
}

impl Side {
    fn align(self) -> gtk::Align {
        match self {
            Side::Start => gtk::Align::Start,
            Side::End => gtk::Align::End,
        }
    }
}

/// Entries alternate sides by index parity on wide viewports and collapse
/// to the leading side on narrow ones. Purely presentational.
pub(crate) fn entry_side(index: usize, class: WidthClass) -> Side {
    match class {
        WidthClass::Narrow => Side::Start,
        WidthClass::Wide => {
            if index % 2 == 0 {
                Side::Start
            } else {
                Side::End
            }
        }
    }
}

pub struct JourneyModel {
    entries: &'static [TimelineEntry],
    revealed: usize,
    width_class: WidthClass,
    cards: Vec<RevealCard>,
}

#[derive(Debug)]
pub enum JourneyMsg {
    /// Fresh geometry sample from the scroll/resize signal.
    Viewed(ScrollState),
    WidthChanged(WidthClass),
}

#[relm4::component(pub)]
impl SimpleComponent for JourneyModel {
    type Input = JourneyMsg;
    type Output = ();
    type Init = &'static [TimelineEntry];

    view! {
        gtk::Box {
            set_orientation: gtk::Orientation::Vertical,
            set_spacing: 8,
            set_margin_top: 80,
            set_margin_bottom: 80,

            gtk::Label {
                set_label: "Journey",
                add_css_class: "section-title",
                set_halign: gtk::Align::Center,
            },

            gtk::Label {
                set_label: "My education and professional experience",
                add_css_class: "muted",
                set_halign: gtk::Align::Center,
                set_margin_bottom: 32,
            },

            #[name = "list"]
            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 28,
                set_hexpand: true,
            },
        }
    }

    fn init(
        entries: Self::Init,
        root: Self::Root,
        _sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let mut model = JourneyModel {
            entries,
            revealed: 0,
            width_class: WidthClass::default(),
            cards: Vec::with_capacity(entries.len()),
        };

        let widgets = view_output!();

        for entry in entries {
            let card = RevealCard::new(&entry_card(entry));
            widgets.list.append(&card);
            model.cards.push(card);
        }
        model.sync_cards();

        ComponentParts { model, widgets }
    }

    fn update(&mut self, message: Self::Input, _sender: ComponentSender<Self>) {
        match message {
            JourneyMsg::Viewed(state) => {
                let progress = state.progress();
                let count = revealed_count(progress, self.entries.len());
                // Recomputed on every signal; widgets only touched when the
                // stepped count actually moves.
                if count != self.revealed {
                    tracing::debug!(progress, revealed = count, "timeline reveal step");
                    self.revealed = count;
                    self.sync_cards();
                }
            }
            JourneyMsg::WidthChanged(class) => {
                if class != self.width_class {
                    self.width_class = class;
                    self.sync_cards();
                }
            }
        }
    }
}

impl JourneyModel {
    fn sync_cards(&self) {
        for (index, card) in self.cards.iter().enumerate() {
            card.set_halign(entry_side(index, self.width_class).align());
            card.set_hidden(index >= self.revealed);
        }
    }
}

fn entry_card(entry: &TimelineEntry) -> gtk::Box {
    let card = gtk::Box::new(gtk::Orientation::Vertical, 4);
    card.add_css_class("card");
    card.add_css_class(match entry.category {
        Category::Education => "edu",
        Category::Work => "work",
    });
    card.set_width_request(340);

    let title = gtk::Label::new(Some(entry.title));
    title.add_css_class("card-title");
    title.set_halign(gtk::Align::Start);
    card.append(&title);

    let organization = gtk::Label::new(Some(entry.organization));
    organization.add_css_class("muted");
    organization.set_halign(gtk::Align::Start);
    card.append(&organization);

    let period = gtk::Label::new(Some(entry.period));
    period.add_css_class("dim");
    period.set_halign(gtk::Align::Start);
    card.append(&period);

    let description = gtk::Label::new(Some(entry.description));
    description.add_css_class("card-body");
    description.set_wrap(true);
    description.set_xalign(0.0);
    description.set_margin_top(6);
    card.append(&description);

    let chips = gtk::FlowBox::new();
    chips.set_selection_mode(gtk::SelectionMode::None);
    chips.set_column_spacing(6);
    chips.set_row_spacing(6);
    chips.set_max_children_per_line(4);
    chips.set_margin_top(6);
    for skill in entry.skills {
        let chip = gtk::Label::new(Some(skill));
        chip.add_css_class("chip");
        let child = gtk::FlowBoxChild::new();
        child.set_child(Some(&chip));
        child.set_focusable(false);
        chips.insert(&child, -1);
    }
    card.append(&chips);

    card
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_viewports_alternate_by_parity() {
        assert_eq!(entry_side(0, WidthClass::Wide), Side::Start);
        assert_eq!(entry_side(1, WidthClass::Wide), Side::End);
        assert_eq!(entry_side(2, WidthClass::Wide), Side::Start);
        assert_eq!(entry_side(3, WidthClass::Wide), Side::End);
    }

    #[test]
    fn narrow_viewports_collapse_to_one_side() {
        for index in 0..8 {
            assert_eq!(entry_side(index, WidthClass::Narrow), Side::Start);
        }
    }

    #[test]
    fn width_class_threshold() {
        assert_eq!(WidthClass::from_width(759), WidthClass::Narrow);
        assert_eq!(WidthClass::from_width(760), WidthClass::Wide);
        assert_eq!(WidthClass::from_width(1920), WidthClass::Wide);
    }
}
