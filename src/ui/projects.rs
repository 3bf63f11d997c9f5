use std::ops::Range;
use std::path::PathBuf;

use gtk4::prelude::{BoxExt, ButtonExt, FlowBoxChildExt, OrientableExt, WidgetExt};
use relm4::{
    gtk, Component, ComponentController, ComponentParts, ComponentSender, Controller,
};

use crate::content::{self, Project};
use crate::ui::gallery::{GalleryModel, GalleryMsg};

const PER_PAGE: usize = 3;

/// Number of pages needed to show `total` items, `per_page` at a time.
pub(crate) fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Steps an index by `delta` with wrap-around.
pub(crate) fn cycle(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).rem_euclid(len as isize) as usize
}

pub(crate) fn page_range(page: usize, per_page: usize, total: usize) -> Range<usize> {
    let start = (page * per_page).min(total);
    start..(start + per_page).min(total)
}

pub struct ProjectsModel {
    projects: &'static [Project],
    page: usize,
    dots: Vec<gtk::Button>,
    gallery: Controller<GalleryModel>,
}

#[derive(Debug)]
pub enum ProjectsMsg {
    PrevPage,
    NextPage,
    SetPage(usize),
    /// Index into the full project list, not the visible page.
    OpenGallery(usize),
}

#[relm4::component(pub)]
impl Component for ProjectsModel {
    type CommandOutput = ();
    type Input = ProjectsMsg;
    type Output = ();
    type Init = &'static [Project];

    view! {
        gtk::Box {
            set_orientation: gtk::Orientation::Vertical,
            set_spacing: 8,
            set_margin_top: 80,
            set_margin_bottom: 80,

            gtk::Label {
                set_label: "Featured Projects",
                add_css_class: "section-title",
                set_halign: gtk::Align::Center,
            },

            gtk::Label {
                set_label: "Enterprise solutions and personal experiments",
                add_css_class: "muted",
                set_halign: gtk::Align::Center,
                set_margin_bottom: 24,
            },

            gtk::CenterBox {
                #[wrap(Some)]
                set_start_widget: prev = &gtk::Button {
                    set_icon_name: "go-previous-symbolic",
                    add_css_class: "circular",
                    set_valign: gtk::Align::Center,
                    set_margin_end: 12,
                    #[watch]
                    set_visible: page_count(model.projects.len(), PER_PAGE) > 1,
                    connect_clicked => ProjectsMsg::PrevPage,
                },

                #[wrap(Some)]
                set_center_widget: cards = &gtk::Box {
                    set_spacing: 16,
                    set_homogeneous: true,
                    set_hexpand: true,
                },

                #[wrap(Some)]
                set_end_widget: next = &gtk::Button {
                    set_icon_name: "go-next-symbolic",
                    add_css_class: "circular",
                    set_valign: gtk::Align::Center,
                    set_margin_start: 12,
                    #[watch]
                    set_visible: page_count(model.projects.len(), PER_PAGE) > 1,
                    connect_clicked => ProjectsMsg::NextPage,
                },
            },

            #[name = "dots"]
            gtk::Box {
                set_spacing: 8,
                set_halign: gtk::Align::Center,
                set_margin_top: 16,
            },
        }
    }

    fn init(
        projects: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let gallery = GalleryModel::builder().launch(()).detach();

        let mut model = ProjectsModel {
            projects,
            page: 0,
            dots: Vec::new(),
            gallery,
        };

        let widgets = view_output!();

        for i in 0..page_count(projects.len(), PER_PAGE) {
            let dot = gtk::Button::new();
            dot.add_css_class("dot");
            let sender = sender.clone();
            dot.connect_clicked(move |_| sender.input(ProjectsMsg::SetPage(i)));
            widgets.dots.append(&dot);
            model.dots.push(dot);
        }
        model.rebuild_cards(&widgets.cards, &sender);

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
            ProjectsMsg::PrevPage => {
                self.page = cycle(self.page, -1, page_count(self.projects.len(), PER_PAGE));
                self.rebuild_cards(&widgets.cards, &sender);
            }
            ProjectsMsg::NextPage => {
                self.page = cycle(self.page, 1, page_count(self.projects.len(), PER_PAGE));
                self.rebuild_cards(&widgets.cards, &sender);
            }
            ProjectsMsg::SetPage(page) => {
                if page != self.page && page < page_count(self.projects.len(), PER_PAGE) {
                    self.page = page;
                    self.rebuild_cards(&widgets.cards, &sender);
                }
            }
            ProjectsMsg::OpenGallery(index) => {
                let project = &self.projects[index];
                let images: Vec<PathBuf> = project
                    .images
                    .iter()
                    .filter_map(|name| match content::asset_path(name) {
                        Ok(path) => Some(path),
                        Err(err) => {
                            tracing::warn!("gallery image skipped: {err}");
                            None
                        }
                    })
                    .collect();
                if images.is_empty() {
                    tracing::warn!(project = project.title, "no gallery images on disk");
                } else {
                    self.gallery.emit(GalleryMsg::Open {
                        title: project.title.to_string(),
                        images,
                    });
                }
            }
        }

        self.update_view(widgets, sender);
    }
}

impl ProjectsModel {
    fn rebuild_cards(&self, container: &gtk::Box, sender: &ComponentSender<Self>) {
        while let Some(child) = container.first_child() {
            container.remove(&child);
        }
        for index in page_range(self.page, PER_PAGE, self.projects.len()) {
            container.append(&project_card(&self.projects[index], index, sender));
        }
        for (i, dot) in self.dots.iter().enumerate() {
            if i == self.page {
                dot.add_css_class("active");
            } else {
                dot.remove_css_class("active");
            }
        }
    }
}

fn project_card(project: &Project, index: usize, sender: &ComponentSender<ProjectsModel>) -> gtk::Box {
    let card = gtk::Box::new(gtk::Orientation::Vertical, 0);
    card.add_css_class("card");
    card.add_css_class("project-card");
    card.set_hexpand(true);
    card.set_width_request(300);

    let banner = gtk::Box::new(gtk::Orientation::Vertical, 0);
    banner.set_height_request(160);
    banner.add_css_class("banner");

    if let Some(first) = project.images.first() {
        match content::asset_path(first) {
            Ok(path) => {
                let picture = gtk::Picture::for_filename(path);
                picture.set_content_fit(gtk::ContentFit::Cover);
                picture.set_vexpand(true);
                banner.append(&picture);
            }
            Err(err) => {
                tracing::warn!("project art missing: {err}");
                banner.add_css_class("banner-gradient");
            }
        }
        let click = gtk::GestureClick::new();
        let sender = sender.clone();
        click.connect_released(move |_, _, _, _| sender.input(ProjectsMsg::OpenGallery(index)));
        banner.add_controller(click);
    } else {
        banner.add_css_class("banner-gradient");
    }
    card.append(&banner);

    let body = gtk::Box::new(gtk::Orientation::Vertical, 6);
    body.set_margin_top(12);
    body.set_margin_bottom(12);
    body.set_margin_start(12);
    body.set_margin_end(12);

    let title = gtk::Label::new(Some(project.title));
    title.add_css_class("card-title");
    title.set_halign(gtk::Align::Start);
    title.set_wrap(true);
    title.set_xalign(0.0);
    body.append(&title);

    let description = gtk::Label::new(Some(project.description));
    description.add_css_class("card-body");
    description.set_wrap(true);
    description.set_xalign(0.0);
    body.append(&description);

    let tags = gtk::FlowBox::new();
    tags.set_selection_mode(gtk::SelectionMode::None);
    tags.set_column_spacing(6);
    tags.set_row_spacing(6);
    tags.set_max_children_per_line(3);
    for tag in project.tags {
        let chip = gtk::Label::new(Some(tag));
        chip.add_css_class("chip");
        let child = gtk::FlowBoxChild::new();
        child.set_child(Some(&chip));
        child.set_focusable(false);
        tags.insert(&child, -1);
    }
    body.append(&tags);

    match project.link {
        Some(uri) => {
            let link = gtk::LinkButton::with_label(uri, "View Project");
            link.set_halign(gtk::Align::Start);
            body.append(&link);
        }
        None => {
            let locked = gtk::Box::new(gtk::Orientation::Horizontal, 6);
            locked.set_margin_top(4);
            let lock = gtk::Image::from_icon_name("system-lock-screen-symbolic");
            locked.append(&lock);
            let label = gtk::Label::new(Some("Contact for a demo"));
            label.add_css_class("dim");
            locked.append(&label);
            body.append(&locked);
        }
    }

    card.append(&body);
    card
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 3), 0);
        assert_eq!(page_count(3, 3), 1);
        assert_eq!(page_count(4, 3), 2);
        assert_eq!(page_count(7, 3), 3);
    }

    #[test]
    fn page_count_guards_zero_per_page() {
        assert_eq!(page_count(10, 0), 0);
    }

    #[test]
    fn cycle_wraps_both_directions() {
        assert_eq!(cycle(0, 1, 3), 1);
        assert_eq!(cycle(2, 1, 3), 0);
        assert_eq!(cycle(0, -1, 3), 2);
        assert_eq!(cycle(0, -1, 0), 0);
    }

    #[test]
    fn page_range_clips_the_last_page() {
        assert_eq!(page_range(0, 3, 4), 0..3);
        assert_eq!(page_range(1, 3, 4), 3..4);
        assert_eq!(page_range(5, 3, 4), 4..4);
    }
}
