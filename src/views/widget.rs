use crate::constants::{
    BACK_LABEL, HUD_STATUS, RING_COUNT, SATELLITES, SATELLITE_ACTIVE_LABEL,
    SATELLITE_STANDBY_LABEL,
};
use crate::dom::{self, Listener};
use crate::pointer::PointerTracker;
use crate::pulse::HoverSegment;
use crate::transform::{ring_diameter_px, ring_spin_sec, widget_rotation};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct SatelliteElements {
    card: web::HtmlElement,
    status: web::HtmlElement,
}

struct WidgetElements {
    root: web::HtmlElement,
    core: web::HtmlElement,
    back: web::HtmlElement,
    rings: Vec<web::HtmlElement>,
    satellites: Vec<SatelliteElements>,
    hud_x: web::HtmlElement,
    hud_y: web::HtmlElement,
}

struct WidgetState {
    tracker: PointerTracker,
    hover: HoverSegment,
    els: WidgetElements,
}

impl WidgetState {
    fn paint_rotation(&self) {
        let rot = widget_rotation(self.tracker.offset());
        dom::set_style(&self.els.core, "transform", &rot.core_css());
        for (i, ring) in self.els.rings.iter().enumerate() {
            dom::set_style(ring, "transform", &rot.ring_css(i));
        }
        for (sat, els) in SATELLITES.iter().zip(self.els.satellites.iter()) {
            dom::set_style(&els.card, "transform", &rot.billboard_css(sat));
        }
        dom::set_text(&self.els.hud_x, &rot.hud_x());
        dom::set_text(&self.els.hud_y, &rot.hud_y());
    }

    fn paint_hover(&self) {
        let hovered = self.hover.active();
        for (i, els) in self.els.satellites.iter().enumerate() {
            let active = hovered == Some(i);
            _ = els.card.class_list().toggle_with_force("active", active);
            dom::set_text(
                &els.status,
                if active {
                    SATELLITE_ACTIVE_LABEL
                } else {
                    SATELLITE_STANDBY_LABEL
                },
            );
        }
    }
}

/// Orbital diagram that tilts toward the cursor. The tilt is kept when
/// the pointer leaves.
pub struct WidgetView {
    root: web::HtmlElement,
    _state: Rc<RefCell<WidgetState>>,
    _listeners: Vec<Listener>,
}

impl WidgetView {
    pub fn mount(parent: &web::Node, on_back: impl Fn() + 'static) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let els = build(&document)?;
        dom::append(parent, &els.root)?;
        let root = els.root.clone();

        let state = Rc::new(RefCell::new(WidgetState {
            tracker: PointerTracker::widget(),
            hover: HoverSegment::default(),
            els,
        }));
        {
            let s = state.borrow();
            s.paint_rotation();
            s.paint_hover();
        }

        let listeners = wire_listeners(&state, on_back);
        log::info!("[widget] mounted");

        Ok(Self {
            root,
            _state: state,
            _listeners: listeners,
        })
    }
}

impl Drop for WidgetView {
    fn drop(&mut self) {
        self.root.remove();
        log::info!("[widget] unmounted");
    }
}

fn wire_listeners(
    state: &Rc<RefCell<WidgetState>>,
    on_back: impl Fn() + 'static,
) -> Vec<Listener> {
    let (root, back, cards) = {
        let s = state.borrow();
        let cards: Vec<web::HtmlElement> =
            s.els.satellites.iter().map(|e| e.card.clone()).collect();
        (s.els.root.clone(), s.els.back.clone(), cards)
    };
    let mut listeners = Vec::with_capacity(2 + cards.len() * 2);

    // No mouseleave handler: the widget keeps its last tilt.
    let weak = Rc::downgrade(state);
    listeners.push(Listener::new(&root, "mousemove", move |ev: web::MouseEvent| {
        let Some(state) = weak.upgrade() else { return };
        let mut s = state.borrow_mut();
        let rect = dom::bounding_rect(&s.els.root);
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        if s.tracker.on_move(client, rect) {
            s.paint_rotation();
        }
    }));

    listeners.push(Listener::new(&back, "click", move |_ev| {
        log::info!("[widget] back requested");
        on_back();
    }));

    for (i, card) in cards.iter().enumerate() {
        let weak = Rc::downgrade(state);
        listeners.push(Listener::new(card, "mouseenter", move |_ev| {
            let Some(state) = weak.upgrade() else { return };
            let mut s = state.borrow_mut();
            if s.hover.enter(i) {
                s.paint_hover();
            }
        }));
        let weak = Rc::downgrade(state);
        listeners.push(Listener::new(card, "mouseleave", move |_ev| {
            let Some(state) = weak.upgrade() else { return };
            let mut s = state.borrow_mut();
            if s.hover.leave(i) {
                s.paint_hover();
            }
        }));
    }

    listeners
}

fn build(document: &web::Document) -> anyhow::Result<WidgetElements> {
    let root = dom::element(document, "div", "widget")?;

    let back = dom::element(document, "button", "widget-back")?;
    dom::append(&back, &dom::text_element(document, "span", "widget-back-arrow", "\u{2190}")?)?;
    dom::append(&back, &dom::text_element(document, "span", "widget-back-label", BACK_LABEL)?)?;
    dom::append(&root, &back)?;
    dom::append(&root, &dom::element(document, "div", "widget-grid")?)?;

    let scene = dom::element(document, "div", "widget-scene")?;
    let core = dom::element(document, "div", "widget-core")?;
    dom::append(&scene, &core)?;
    dom::append(&root, &scene)?;

    dom::append(&core, &dom::element(document, "div", "core-glow")?)?;
    let sphere = dom::element(document, "div", "core-sphere")?;
    dom::append(&sphere, &dom::text_element(document, "span", "core-icon", "\u{223F}")?)?;
    dom::append(&core, &sphere)?;

    let mut rings = Vec::with_capacity(RING_COUNT);
    for i in 0..RING_COUNT {
        let ring = dom::element(document, "div", "orbit-ring")?;
        let d = format!("{}px", ring_diameter_px(i));
        dom::set_style(&ring, "width", &d);
        dom::set_style(&ring, "height", &d);
        dom::set_style(
            &ring,
            "animation",
            &format!("spin {}s linear infinite reverse", ring_spin_sec(i)),
        );
        dom::append(&core, &ring)?;
        rings.push(ring);
    }

    let mut satellites = Vec::with_capacity(SATELLITES.len());
    for sat in SATELLITES.iter() {
        let card = dom::element(document, "div", &format!("satellite accent-{}", sat.accent))?;
        dom::append(&card, &dom::text_element(document, "span", "satellite-icon", sat.glyph)?)?;
        let body = dom::element(document, "div", "satellite-body")?;
        dom::append(&body, &dom::text_element(document, "div", "satellite-label", sat.label)?)?;
        let status =
            dom::text_element(document, "div", "satellite-status", SATELLITE_STANDBY_LABEL)?;
        dom::append(&body, &status)?;
        dom::append(&card, &body)?;
        dom::append(&core, &card)?;
        satellites.push(SatelliteElements { card, status });
    }

    let hud = dom::element(document, "div", "widget-hud")?;
    let hud_x = dom::element(document, "div", "hud-readout")?;
    let hud_y = dom::element(document, "div", "hud-readout")?;
    dom::append(&hud, &hud_x)?;
    dom::append(&hud, &dom::element(document, "div", "hud-divider")?)?;
    dom::append(&hud, &hud_y)?;
    dom::append(&hud, &dom::element(document, "div", "hud-divider")?)?;
    dom::append(&hud, &dom::text_element(document, "div", "hud-readout", HUD_STATUS)?)?;
    dom::append(&root, &hud)?;

    Ok(WidgetElements {
        root,
        core,
        back,
        rings,
        satellites,
        hud_x,
        hud_y,
    })
}
