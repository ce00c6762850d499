use crate::views::{LandingView, WidgetView};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenKind {
    Landing,
    Widget,
}

// Views are held only so they unmount on drop.
enum Screen {
    Landing { _view: LandingView },
    Widget { _view: WidgetView },
}

impl Screen {
    fn kind(&self) -> ScreenKind {
        match self {
            Screen::Landing { .. } => ScreenKind::Landing,
            Screen::Widget { .. } => ScreenKind::Widget,
        }
    }
}

/// Top-level view switcher. Holds exactly one mounted view.
pub struct App {
    mount: web::Node,
    screen: Option<Screen>,
}

impl App {
    pub fn start(mount: web::Node) -> anyhow::Result<Rc<RefCell<App>>> {
        let app = Rc::new(RefCell::new(App {
            mount,
            screen: None,
        }));
        show(&app, ScreenKind::Landing)?;
        Ok(app)
    }

    pub fn current(&self) -> Option<ScreenKind> {
        self.screen.as_ref().map(Screen::kind)
    }
}

fn show(app: &Rc<RefCell<App>>, kind: ScreenKind) -> anyhow::Result<()> {
    // Unmount first so the old view's listeners and timers are gone
    // before the new one attaches.
    let (mount, old) = {
        let mut a = app.borrow_mut();
        (a.mount.clone(), a.screen.take())
    };
    drop(old);

    let weak = Rc::downgrade(app);
    let screen = match kind {
        ScreenKind::Landing => Screen::Landing {
            _view: LandingView::mount(&mount, move || switch_later(&weak, ScreenKind::Widget))?,
        },
        ScreenKind::Widget => Screen::Widget {
            _view: WidgetView::mount(&mount, move || switch_later(&weak, ScreenKind::Landing))?,
        },
    };
    app.borrow_mut().screen = Some(screen);
    log::info!("[app] showing {:?}", kind);
    Ok(())
}

// Views call back from inside their own handlers; the swap runs on the
// next microtask so a view is never dropped mid-callback.
fn switch_later(app: &Weak<RefCell<App>>, kind: ScreenKind) {
    let app = app.clone();
    spawn_local(async move {
        let Some(app) = app.upgrade() else { return };
        if app.borrow().current() == Some(kind) {
            return;
        }
        if let Err(e) = show(&app, kind) {
            log::error!("[app] failed to show {:?}: {:?}", kind, e);
        }
    });
}
