use crate::config::Config;
use crate::events::AppEvent;
use crate::gui::compass;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window;
use crate::sys::runtime::Services;
use compass_core::{ItemId, Navigation, Navigator, Orientation, Point};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::broadcast;

pub struct AppModel {
    pub navigator: Rc<RefCell<Navigator>>,
    pub visible: bool,
    pub navigations: broadcast::Sender<ItemId>,
    pub root: gtk::ApplicationWindow,
    pub drawing_area: gtk::DrawingArea,
    tick: Option<gtk::TickCallbackId>,
}

#[derive(Debug)]
pub enum AppMsg {
    Show,
    Hide,
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    PointerLeave,
    Step(isize),
    ActiveSection(ItemId),
    SetOrientation(Orientation),
    ConfigReload(Config),
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Show => AppMsg::Show,
            AppEvent::Hide => AppMsg::Hide,
            AppEvent::ActiveSection(id) => AppMsg::ActiveSection(id),
            AppEvent::Orientation(o) => AppMsg::SetOrientation(o),
            AppEvent::ConfigReload(config) => AppMsg::ConfigReload(config),
        }
    }
}

impl AppModel {
    fn publish(&self, navigation: Option<Navigation>) {
        if let Some(navigation) = navigation {
            log::info!("Navigate to '{}'", navigation.id);
            // no subscribers is fine
            let _ = self.navigations.send(navigation.id);
        }
    }

    fn set_orientation(&self, orientation: Orientation) {
        self.navigator.borrow_mut().set_orientation(orientation);
        window::anchor(&self.root, orientation);
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Navigator, Services);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Compass"),
            #[watch]
            set_visible: model.visible,
            add_css_class: "compass-window",
            set_decorated: false,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    use gtk::gdk::Key;
                    let msg = if key == Key::Escape {
                        AppMsg::Hide
                    } else if key == Key::Up || key == Key::Left {
                        AppMsg::Step(-1)
                    } else if key == Key::Down || key == Key::Right {
                        AppMsg::Step(1)
                    } else {
                        return glib::Propagation::Proceed;
                    };
                    sender.input(msg);
                    glib::Propagation::Stop
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "compass-drawing-area",

                // pointer capture: mouse, pen and touch all arrive here
                add_controller = gtk::GestureDrag {
                    connect_drag_begin[sender] => move |_, x, y| {
                        sender.input(AppMsg::PointerDown(Point::new(x, y)));
                    },
                    connect_drag_update[sender] => move |gesture, dx, dy| {
                        if let Some((x, y)) = gesture.start_point() {
                            sender.input(AppMsg::PointerMove(Point::new(x + dx, y + dy)));
                        }
                    },
                    connect_drag_end[sender] => move |gesture, dx, dy| {
                        if let Some((x, y)) = gesture.start_point() {
                            sender.input(AppMsg::PointerMove(Point::new(x + dx, y + dy)));
                        }
                        sender.input(AppMsg::PointerUp);
                    },
                    connect_cancel[sender] => move |_, _| {
                        sender.input(AppMsg::PointerLeave);
                    },
                },

                add_controller = gtk::EventControllerMotion {
                    connect_leave[sender] => move |_| {
                        sender.input(AppMsg::PointerLeave);
                    }
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (navigator, services) = init;
        let Services {
            events: rx,
            navigations,
        } = services;

        theme::load_css();
        window::init_layer_shell(&root, navigator.orientation());

        let navigator = Rc::new(RefCell::new(navigator));

        let model = AppModel {
            navigator: navigator.clone(),
            visible: true,
            navigations,
            root: root.clone(),
            drawing_area: gtk::DrawingArea::default(),
            tick: None,
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let nav_resize = model.navigator.clone();
        widgets
            .drawing_area
            .connect_resize(move |_, width, height| {
                nav_resize
                    .borrow_mut()
                    .resize(width as f64, height as f64);
            });

        let nav_draw = model.navigator.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = compass::draw(cr, &nav_draw.borrow(), &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        // one subscription for the widget's lifetime, removed in shutdown
        let nav_tick = model.navigator.clone();
        model.tick = Some(widgets.drawing_area.add_tick_callback(
            move |drawing_area, clock| {
                let micros = u64::try_from(clock.frame_time()).unwrap_or_default();
                if nav_tick.borrow_mut().advance(Duration::from_micros(micros)) > 0 {
                    drawing_area.queue_draw();
                }
                glib::ControlFlow::Continue
            },
        ));

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Show => {
                self.navigator.borrow_mut().resume();
                self.visible = true;
            }
            AppMsg::Hide => {
                self.visible = false;
            }
            AppMsg::PointerDown(point) => {
                self.navigator.borrow_mut().pointer_down(point);
            }
            AppMsg::PointerMove(point) => {
                self.navigator.borrow_mut().pointer_move(point);
            }
            AppMsg::PointerUp => {
                let navigation = self.navigator.borrow_mut().pointer_up();
                self.publish(navigation);
            }
            AppMsg::PointerLeave => {
                let navigation = self.navigator.borrow_mut().pointer_leave();
                self.publish(navigation);
            }
            AppMsg::Step(offset) => {
                let navigation = self.navigator.borrow_mut().navigate_relative(offset);
                self.publish(navigation);
            }
            AppMsg::ActiveSection(id) => {
                self.navigator.borrow_mut().set_active_section(id);
            }
            AppMsg::SetOrientation(orientation) => {
                self.set_orientation(orientation);
            }
            AppMsg::ConfigReload(new_config) => {
                let orientation = new_config.orientation;
                match new_config.apply_to(&mut self.navigator.borrow_mut()) {
                    Ok(()) => {
                        window::anchor(&self.root, orientation);
                        log::info!("Configuration reloaded");
                    }
                    Err(e) => log::error!("Rejected reloaded config: {}", e),
                }
            }
        }
        self.drawing_area.queue_draw();
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        if let Some(tick) = self.tick.take() {
            tick.remove();
        }
    }
}
