use crate::constants::{
    CONTENT_URL, FEATURE_CARDS, LOGO_ALT, LOGO_CAPTION, LOGO_SRC, PULSE_DURATION_MS,
};
use crate::content::{self, ContentText};
use crate::dom::{self, Listener, Timeout};
use crate::fetch::{self, InFlight};
use crate::pointer::PointerTracker;
use crate::pulse::{ClickPulse, PulseTicket};
use crate::transform::landing_transform;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct LandingElements {
    background: web::HtmlElement,
    stage: web::HtmlElement,
    logo: web::HtmlElement,
    logo_img: web::HtmlElement,
    title: web::HtmlElement,
    description: web::HtmlElement,
}

struct LandingState {
    tracker: PointerTracker,
    pulse: ClickPulse,
    // Fired timers stay here until the next click or teardown replaces them.
    pulse_timer: Option<Timeout>,
    text: ContentText,
    els: LandingElements,
    on_activate: Rc<dyn Fn()>,
}

impl LandingState {
    fn paint_transforms(&self) {
        let t = landing_transform(self.tracker.offset(), self.pulse.is_pulsing());
        dom::set_style(&self.els.background, "background", &t.background_css());
        dom::set_style(&self.els.logo, "transform", &t.logo_css());
        dom::set_class(&self.els.logo_img, self.pulse.logo_image_class());
    }

    fn paint_text(&self) {
        dom::set_text(&self.els.title, &self.text.title);
        dom::set_text(&self.els.description, &self.text.description);
    }

    fn paint(&self) {
        self.paint_transforms();
        self.paint_text();
    }
}

/// Landing screen: parallax background, tilting logo, hydrated text and
/// the feature grid. Dropping it unmounts and cancels pending work.
pub struct LandingView {
    root: web::HtmlElement,
    state: Rc<RefCell<LandingState>>,
    _listeners: Vec<Listener>,
    _in_flight: Option<InFlight>,
}

impl LandingView {
    pub fn mount(parent: &web::Node, on_activate: impl Fn() + 'static) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let (root, els) = build(&document)?;
        dom::append(parent, &root)?;

        let state = Rc::new(RefCell::new(LandingState {
            tracker: PointerTracker::landing(),
            pulse: ClickPulse::default(),
            pulse_timer: None,
            text: ContentText::default(),
            els,
            on_activate: Rc::new(on_activate),
        }));
        state.borrow().paint();

        let listeners = wire_listeners(&state);
        let in_flight = spawn_hydration(&state);
        log::info!("[landing] mounted");

        Ok(Self {
            root,
            state,
            _listeners: listeners,
            _in_flight: in_flight,
        })
    }
}

impl Drop for LandingView {
    fn drop(&mut self) {
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.pulse_timer = None;
        }
        self.root.remove();
        log::info!("[landing] unmounted");
    }
}

fn wire_listeners(state: &Rc<RefCell<LandingState>>) -> Vec<Listener> {
    let (stage, logo) = {
        let s = state.borrow();
        (s.els.stage.clone(), s.els.logo.clone())
    };

    let weak = Rc::downgrade(state);
    let on_move = Listener::new(&stage, "mousemove", move |ev: web::MouseEvent| {
        let Some(state) = weak.upgrade() else { return };
        let mut s = state.borrow_mut();
        let rect = dom::bounding_rect(&s.els.stage);
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        if s.tracker.on_move(client, rect) {
            s.paint_transforms();
        }
    });

    let weak = Rc::downgrade(state);
    let on_leave = Listener::new(&stage, "mouseleave", move |_ev| {
        let Some(state) = weak.upgrade() else { return };
        let mut s = state.borrow_mut();
        if s.tracker.on_leave() {
            s.paint_transforms();
        }
    });

    let weak = Rc::downgrade(state);
    let on_click = Listener::new(&logo, "click", move |_ev| {
        let Some(state) = weak.upgrade() else { return };
        let ticket = state.borrow_mut().pulse.trigger();
        let timer_state = Rc::downgrade(&state);
        let timer = Timeout::schedule(PULSE_DURATION_MS, move || {
            settle_pulse(&timer_state, ticket)
        });
        let mut s = state.borrow_mut();
        // Replacing the handle clears any earlier pending timer.
        s.pulse_timer = match timer {
            Ok(t) => Some(t),
            Err(e) => {
                log::warn!("[landing] pulse timer unavailable: {:?}", e);
                None
            }
        };
        s.paint_transforms();
    });

    vec![on_move, on_leave, on_click]
}

fn settle_pulse(state: &Weak<RefCell<LandingState>>, ticket: PulseTicket) {
    let Some(state) = state.upgrade() else { return };
    let activate = {
        let mut s = state.borrow_mut();
        if !s.pulse.settle(ticket) {
            return;
        }
        s.paint_transforms();
        s.on_activate.clone()
    };
    activate();
}

fn spawn_hydration(state: &Rc<RefCell<LandingState>>) -> Option<InFlight> {
    let in_flight = InFlight::new();
    let signal = in_flight.as_ref().map(InFlight::signal);
    let weak = Rc::downgrade(state);
    spawn_local(async move {
        let result = fetch::fetch_content(CONTENT_URL, signal.as_ref()).await;
        if signal.as_ref().is_some_and(|s| s.aborted()) {
            log::debug!("[hydrate] request aborted on teardown");
            return;
        }
        let Some(state) = weak.upgrade() else { return };
        let mut guard = state.borrow_mut();
        let s = &mut *guard;
        let changed = content::hydrate(&mut s.text, result, |e| {
            log::error!("[hydrate] failed to load {}: {}", CONTENT_URL, e);
        });
        if changed {
            s.paint_text();
        }
    });
    in_flight
}

fn build(document: &web::Document) -> anyhow::Result<(web::HtmlElement, LandingElements)> {
    let root = dom::element(document, "div", "landing")?;
    let background = dom::element(document, "div", "landing-bg")?;
    let grid = dom::element(document, "div", "landing-grid")?;
    let stage = dom::element(document, "main", "landing-stage")?;
    dom::append(&root, &background)?;
    dom::append(&root, &grid)?;
    dom::append(&root, &stage)?;

    // Logo: aura, glass card with image, hover caption
    let logo = dom::element(document, "div", "logo")?;
    let aura = dom::element(document, "div", "logo-aura")?;
    let card = dom::element(document, "div", "logo-card")?;
    let sheen = dom::element(document, "div", "logo-sheen")?;
    let logo_img = dom::element(document, "img", "logo-img")?;
    _ = logo_img.set_attribute("src", LOGO_SRC);
    _ = logo_img.set_attribute("alt", LOGO_ALT);
    let caption = dom::text_element(document, "span", "logo-caption", LOGO_CAPTION)?;
    dom::append(&card, &sheen)?;
    dom::append(&card, &logo_img)?;
    dom::append(&logo, &aura)?;
    dom::append(&logo, &card)?;
    dom::append(&logo, &caption)?;
    dom::append(&stage, &logo)?;

    let heading = dom::element(document, "div", "landing-heading")?;
    let title = dom::element(document, "h1", "landing-title")?;
    let description = dom::element(document, "p", "landing-description")?;
    dom::append(&heading, &title)?;
    dom::append(&heading, &description)?;
    dom::append(&stage, &heading)?;

    let features = dom::element(document, "div", "feature-grid")?;
    for f in FEATURE_CARDS.iter() {
        let card = dom::element(document, "div", "feature-card")?;
        dom::append(&card, &dom::text_element(document, "span", "feature-icon", f.glyph)?)?;
        dom::append(&card, &dom::text_element(document, "h3", "feature-title", f.title)?)?;
        dom::append(&card, &dom::text_element(document, "p", "feature-desc", f.desc)?)?;
        dom::append(&features, &card)?;
    }
    dom::append(&stage, &features)?;

    Ok((
        root,
        LandingElements {
            background,
            stage,
            logo,
            logo_img,
            title,
            description,
        },
    ))
}
