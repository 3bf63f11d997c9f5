use gtk4::prelude::{BoxExt, ButtonExt, OrientableExt, WidgetExt};
use gtk4::{gdk, gio};
use relm4::{adw, gtk, ComponentParts, ComponentSender, SimpleComponent};

use crate::content::{self, PROFILE};

pub struct HeroModel;

#[derive(Debug)]
pub enum HeroMsg {
    OpenResume,
    OpenLink(String),
}

#[relm4::component(pub)]
impl SimpleComponent for HeroModel {
    type Input = HeroMsg;
    type Output = ();
    type Init = ();

    view! {
        gtk::Box {
            set_orientation: gtk::Orientation::Vertical,
            set_spacing: 10,
            set_halign: gtk::Align::Center,
            set_margin_top: 96,
            set_margin_bottom: 120,

            #[name = "avatar"]
            adw::Avatar {
                set_size: 140,
                set_text: Some(PROFILE.name),
                set_show_initials: true,
                set_halign: gtk::Align::Center,
                set_margin_bottom: 10,
            },

            gtk::Label {
                set_label: PROFILE.name,
                add_css_class: "hero-name",
                set_halign: gtk::Align::Center,
            },

            gtk::Label {
                set_label: PROFILE.tagline,
                add_css_class: "hero-tagline",
                set_wrap: true,
                set_justify: gtk::Justification::Center,
            },

            gtk::Label {
                set_label: PROFILE.blurb,
                add_css_class: "muted",
                set_wrap: true,
                set_justify: gtk::Justification::Center,
                set_margin_bottom: 14,
            },

            gtk::Box {
                set_spacing: 12,
                set_halign: gtk::Align::Center,

                gtk::Button {
                    set_label: "Download Resume",
                    add_css_class: "pill",
                    add_css_class: "suggested-action",
                    connect_clicked => HeroMsg::OpenResume,
                },

                gtk::Button {
                    set_label: "Get in Touch",
                    add_css_class: "pill",
                    connect_clicked[sender] => move |_| {
                        sender.input(HeroMsg::OpenLink(format!("mailto:{}", PROFILE.email)));
                    },
                },
            },

            gtk::Box {
                set_spacing: 8,
                set_halign: gtk::Align::Center,
                set_margin_top: 8,

                gtk::Button {
                    set_label: "GitHub",
                    add_css_class: "flat",
                    connect_clicked[sender] => move |_| {
                        sender.input(HeroMsg::OpenLink(PROFILE.github.to_string()));
                    },
                },

                gtk::Button {
                    set_label: "Email",
                    add_css_class: "flat",
                    connect_clicked[sender] => move |_| {
                        sender.input(HeroMsg::OpenLink(format!("mailto:{}", PROFILE.email)));
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
        let model = HeroModel;
        let widgets = view_output!();

        match content::asset_path(PROFILE.avatar) {
            Ok(path) => match gdk::Texture::from_filename(&path) {
                Ok(texture) => widgets.avatar.set_custom_image(Some(&texture)),
                Err(err) => tracing::warn!("avatar not loadable: {err}"),
            },
            // Initials fall back in; the avatar asset is optional.
            Err(err) => tracing::debug!("avatar not bundled: {err}"),
        }

        ComponentParts { model, widgets }
    }

    fn update(&mut self, message: Self::Input, _sender: ComponentSender<Self>) {
        match message {
            HeroMsg::OpenResume => match content::asset_path(PROFILE.resume) {
                Ok(path) => {
                    let launcher = gtk::FileLauncher::new(Some(&gio::File::for_path(path)));
                    launcher.launch(
                        None::<&gtk::Window>,
                        None::<&gio::Cancellable>,
                        |result| {
                            if let Err(err) = result {
                                tracing::warn!("failed to open resume: {err}");
                            }
                        },
                    );
                }
                Err(err) => tracing::warn!("resume unavailable: {err}"),
            },
            HeroMsg::OpenLink(uri) => {
                let launcher = gtk::UriLauncher::new(&uri);
                launcher.launch(None::<&gtk::Window>, None::<&gio::Cancellable>, |result| {
                    if let Err(err) = result {
                        tracing::warn!("failed to open link: {err}");
                    }
                });
            }
        }
    }
}
