use std::path::{Path, PathBuf};

use gtk4::prelude::{
    BoxExt, ButtonExt, GtkApplicationExt, GtkWindowExt, OrientableExt, WidgetExt,
};
use relm4::{gtk, Component, ComponentParts, ComponentSender, RelmWidgetExt};

use crate::ui::projects::cycle;

/// Modal image viewer for a project's screenshots.
pub struct GalleryModel {
    title: String,
    images: Vec<PathBuf>,
    index: usize,
    open: bool,
    dots: Vec<gtk::Button>,
}

#[derive(Debug)]
pub enum GalleryMsg {
    Open { title: String, images: Vec<PathBuf> },
    Next,
    Prev,
    Select(usize),
    Close,
}

#[relm4::component(pub)]
impl Component for GalleryModel {
    type CommandOutput = ();
    type Input = GalleryMsg;
    type Output = ();
    type Init = ();

    view! {
        gtk::Window {
            set_modal: true,
            set_default_width: 960,
            set_default_height: 640,
            add_css_class: "gallery",
            #[watch]
            set_visible: model.open,
            #[watch]
            set_title: Some(&model.title),

            connect_close_request[sender] => move |_| {
                sender.input(GalleryMsg::Close);
                gtk::glib::Propagation::Stop
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 12,
                set_margin_all: 12,

                gtk::Picture {
                    set_content_fit: gtk::ContentFit::Contain,
                    set_vexpand: true,
                    set_hexpand: true,
                    #[watch]
                    set_filename: model.current(),
                },

                gtk::CenterBox {
                    #[wrap(Some)]
                    set_start_widget: prev = &gtk::Button {
                        set_icon_name: "go-previous-symbolic",
                        add_css_class: "circular",
                        #[watch]
                        set_visible: model.images.len() > 1,
                        connect_clicked => GalleryMsg::Prev,
                    },

                    #[wrap(Some)]
                    set_center_widget: dots = &gtk::Box {
                        set_spacing: 8,
                        set_halign: gtk::Align::Center,
                    },

                    #[wrap(Some)]
                    set_end_widget: next = &gtk::Button {
                        set_icon_name: "go-next-symbolic",
                        add_css_class: "circular",
                        #[watch]
                        set_visible: model.images.len() > 1,
                        connect_clicked => GalleryMsg::Next,
                    },
                },
            },
        }
    }

    fn init(
        _: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = GalleryModel {
            title: String::new(),
            images: Vec::new(),
            index: 0,
            open: false,
            dots: Vec::new(),
        };

        let widgets = view_output!();

        ComponentParts { model, widgets }
    }

    fn update_with_view(
        &mut self,
        widgets: &mut Self::Widgets,
        message: Self::Input,
        sender: ComponentSender<Self>,
        root: &Self::Root,
    ) {
        match message {
            GalleryMsg::Open { title, images } => {
                tracing::info!(gallery = %title, images = images.len(), "gallery opened");
                self.title = title;
                self.images = images;
                self.index = 0;
                self.open = true;
                root.set_transient_for(relm4::main_application().active_window().as_ref());
                self.rebuild_dots(&widgets.dots, &sender);
            }
            GalleryMsg::Next => self.index = cycle(self.index, 1, self.images.len()),
            GalleryMsg::Prev => self.index = cycle(self.index, -1, self.images.len()),
            GalleryMsg::Select(i) => {
                if i < self.images.len() {
                    self.index = i;
                }
            }
            GalleryMsg::Close => self.open = false,
        }

        self.sync_dots();
        self.update_view(widgets, sender);
    }
}

impl GalleryModel {
    fn current(&self) -> Option<&Path> {
        self.images.get(self.index).map(PathBuf::as_path)
    }

    fn rebuild_dots(&mut self, container: &gtk::Box, sender: &ComponentSender<Self>) {
        while let Some(child) = container.first_child() {
            container.remove(&child);
        }
        self.dots.clear();

        if self.images.len() < 2 {
            return;
        }
        for i in 0..self.images.len() {
            let dot = gtk::Button::new();
            dot.add_css_class("dot");
            let sender = sender.clone();
            dot.connect_clicked(move |_| sender.input(GalleryMsg::Select(i)));
            container.append(&dot);
            self.dots.push(dot);
        }
    }

    fn sync_dots(&self) {
        for (i, dot) in self.dots.iter().enumerate() {
            if i == self.index {
                dot.add_css_class("active");
            } else {
                dot.remove_css_class("active");
            }
        }
    }
}
