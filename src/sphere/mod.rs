//! Responsive sphere scene.
//!
//! Picks the sphere variant for the page and the current viewport, and
//! rebuilds the scene whenever the viewport crosses the desktop breakpoint.
//! Teardown is synchronous: frame loop, listeners, GPU resources and the
//! canvas all go before the replacement is built.

mod render;

use crate::constants::*;
use crate::dom::{self, Listener};
use crate::frame::RafLoop;
use crate::input;
use folio_core::sphere::{SphereAnimator, SphereConfig};
use folio_core::{Breakpoint, SharedFlag};
use glam::Vec2;
use render::GpuSphere;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Pointer sphere on desktop, tilt sphere on mobile.
    Responsive,
    /// Pointer sphere on desktop, nothing on mobile.
    DesktopOnly,
    /// Self-spinning sphere, then redirect.
    Loading,
}

impl Mode {
    fn parse(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some("desktop") => Mode::DesktopOnly,
            Some("loading") => Mode::Loading,
            _ => Mode::Responsive,
        }
    }

    fn variant(self, breakpoint: Breakpoint) -> Option<Variant> {
        match (self, breakpoint) {
            (Mode::Loading, _) => Some(Variant::Loading),
            (_, Breakpoint::Desktop) => Some(Variant::Desktop),
            (Mode::Responsive, Breakpoint::Mobile) => Some(Variant::Mobile),
            (Mode::DesktopOnly, Breakpoint::Mobile) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Variant {
    Desktop,
    Mobile,
    Loading,
}

impl Variant {
    fn config(self) -> SphereConfig {
        match self {
            Variant::Desktop => SphereConfig::desktop(),
            Variant::Mobile => SphereConfig::mobile(),
            Variant::Loading => SphereConfig::loading(),
        }
    }
}

struct Scene {
    variant: Variant,
    canvas: web::HtmlCanvasElement,
    animator: Rc<RefCell<SphereAnimator>>,
    gpu: Rc<RefCell<Option<GpuSphere>>>,
    listeners: Vec<Listener>,
    raf: RafLoop,
}

impl Scene {
    fn teardown(self) {
        self.raf.cancel();
        drop(self.listeners);
        self.animator.borrow_mut().shutdown();
        if let Some(mut gpu) = self.gpu.borrow_mut().take() {
            gpu.destroy();
        }
        self.canvas.remove();
        log::info!("[sphere] {:?} scene torn down", self.variant);
    }
}

struct Controller {
    container: web::Element,
    video: Option<web::HtmlVideoElement>,
    mode: Mode,
    hover: SharedFlag,
    generation: u32,
    scene: Option<Scene>,
}

pub fn init(document: &web::Document, hover: SharedFlag) -> anyhow::Result<()> {
    let container = document
        .get_element_by_id(SPHERE_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{SPHERE_CONTAINER_ID}"))?;
    let mode = Mode::parse(container.get_attribute(SPHERE_MODE_ATTR));
    let video = dom::by_id::<web::HtmlVideoElement>(document, SPHERE_VIDEO_ID);
    if let Some(v) = &video {
        start_video(v);
    }
    log::info!("[sphere] mode {:?}, video texture: {}", mode, video.is_some());

    if mode == Mode::Loading {
        let target = container
            .get_attribute(LOADING_REDIRECT_ATTR)
            .unwrap_or_else(|| LOADING_REDIRECT_DEFAULT.to_owned());
        dom::set_timeout(
            move || {
                if let Some(w) = web::window() {
                    _ = w.location().set_href(&target);
                }
            },
            LOADING_REDIRECT_MS,
        );
    }

    let ctl = Rc::new(RefCell::new(Controller {
        container,
        video,
        mode,
        hover,
        generation: 0,
        scene: None,
    }));
    sync(&ctl);

    let ctl_resize = ctl.clone();
    if let Some(window) = web::window() {
        dom::on(window.as_ref(), "resize", move |_| sync(&ctl_resize))?;
    }
    Ok(())
}

fn start_video(video: &web::HtmlVideoElement) {
    video.set_muted(true);
    video.set_loop(true);
    if let Ok(promise) = video.play() {
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[sphere] video autoplay refused: {:?}", e);
            }
        });
    }
}

/// Builds, replaces or removes the scene to match the viewport.
fn sync(ctl: &Rc<RefCell<Controller>>) {
    let (wanted, current) = {
        let c = ctl.borrow();
        (c.mode.variant(dom::breakpoint()), c.scene.as_ref().map(|s| s.variant))
    };
    if wanted == current {
        return;
    }
    let old = {
        let mut c = ctl.borrow_mut();
        c.generation = c.generation.wrapping_add(1);
        c.scene.take()
    };
    if let Some(scene) = old {
        scene.teardown();
    }
    if let Some(variant) = wanted {
        match build_scene(ctl, variant) {
            Ok(scene) => ctl.borrow_mut().scene = Some(scene),
            Err(e) => log::warn!("[sphere] {:?} scene not started: {:?}", variant, e),
        }
    }
}

fn build_scene(ctl: &Rc<RefCell<Controller>>, variant: Variant) -> anyhow::Result<Scene> {
    let (container, video, hover, generation) = {
        let c = ctl.borrow();
        (c.container.clone(), c.video.clone(), c.hover.clone(), c.generation)
    };
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = variant.config();

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::sync_canvas_to_viewport(&canvas);

    let animator = Rc::new(RefCell::new(
        SphereAnimator::new(config.clone(), dom::now_ms())?.with_hover_flag(hover),
    ));
    let gpu: Rc<RefCell<Option<GpuSphere>>> = Rc::new(RefCell::new(None));
    spawn_gpu_init(Rc::downgrade(ctl), generation, canvas.clone(), config.clone(), video, gpu.clone());

    let listeners = match variant {
        Variant::Desktop => pointer_listeners(&document, &canvas, &animator)?,
        Variant::Mobile => tilt_listeners(&canvas, &animator)?,
        Variant::Loading => Vec::new(),
    };

    let raf = {
        let animator = animator.clone();
        let gpu = gpu.clone();
        let canvas = canvas.clone();
        RafLoop::start(move |ts| {
            let Some(pose) = animator.borrow_mut().tick(ts) else {
                return false;
            };
            let (bw, bh) = dom::sync_canvas_to_viewport(&canvas);
            if let Some(g) = gpu.borrow_mut().as_mut() {
                let (w, h) = dom::viewport_size();
                g.resize_if_needed(bw, bh);
                let camera = config.camera(w as f32, h as f32);
                let scale = config.scale_for(w as f32);
                if let Err(e) = g.render(&camera, pose, scale) {
                    log::error!("[sphere] render error: {:?}", e);
                }
            }
            true
        })
    };

    log::info!("[sphere] {:?} scene started", variant);
    Ok(Scene {
        variant,
        canvas,
        animator,
        gpu,
        listeners,
        raf,
    })
}

// GPU setup is async; a scene torn down before it resolves gets its
// resources destroyed immediately instead of installed.
fn spawn_gpu_init(
    ctl: Weak<RefCell<Controller>>,
    generation: u32,
    canvas: web::HtmlCanvasElement,
    config: SphereConfig,
    video: Option<web::HtmlVideoElement>,
    slot: Rc<RefCell<Option<GpuSphere>>>,
) {
    spawn_local(async move {
        match GpuSphere::new(canvas, &config, video).await {
            Ok(mut gpu) => {
                let current = match ctl.upgrade() {
                    Some(c) => {
                        let live = c.borrow().generation;
                        live == generation
                    }
                    None => false,
                };
                if current {
                    *slot.borrow_mut() = Some(gpu);
                } else {
                    log::debug!("[sphere] discarding GPU state of a stale scene");
                    gpu.destroy();
                }
            }
            Err(e) => log::warn!("[sphere] WebGPU unavailable: {:?}", e),
        }
    });
}

// Ray test against the sphere at its current pose.
fn pick(animator: &SphereAnimator, canvas: &web::HtmlCanvasElement, client: Vec2) -> (Vec2, bool) {
    let rect = dom::client_rect(canvas);
    let ndc = input::client_to_ndc(client, rect);
    let config = animator.config();
    let camera = config.camera(rect.width, rect.height);
    let scale = config.scale_for(dom::viewport_width() as f32);
    (ndc, animator.hit_test(&camera.ray_from_ndc(ndc), scale))
}

fn pointer_listeners(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    animator: &Rc<RefCell<SphereAnimator>>,
) -> anyhow::Result<Vec<Listener>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let move_animator = animator.clone();
    let move_canvas = canvas.clone();
    let on_move = Listener::new(document.as_ref(), "mousemove", move |ev: web::Event| {
        let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let client = Vec2::new(me.client_x() as f32, me.client_y() as f32);
        let mut a = move_animator.borrow_mut();
        let (ndc, hit) = pick(&a, &move_canvas, client);
        a.pointer_moved(ndc, hit, dom::now_ms());
    })?;

    let click_animator = animator.clone();
    let click_canvas = canvas.clone();
    let on_click = Listener::new(window.as_ref(), "click", move |ev: web::Event| {
        let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let client = Vec2::new(me.client_x() as f32, me.client_y() as f32);
        let mut a = click_animator.borrow_mut();
        let (_, hit) = pick(&a, &click_canvas, client);
        if a.click(hit, dom::now_ms()) {
            log::debug!("[sphere] click spin");
        }
    })?;

    Ok(vec![on_move, on_click])
}

fn tilt_listeners(
    canvas: &web::HtmlCanvasElement,
    animator: &Rc<RefCell<SphereAnimator>>,
) -> anyhow::Result<Vec<Listener>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let tilt_animator = animator.clone();
    let on_tilt = Listener::with_options(window.as_ref(), "deviceorientation", true, None, move |ev: web::Event| {
        let Some(o) = ev.dyn_ref::<web::DeviceOrientationEvent>() else {
            return;
        };
        let beta = o.beta().unwrap_or(0.0) as f32;
        let gamma = o.gamma().unwrap_or(0.0) as f32;
        tilt_animator.borrow_mut().tilt(beta, gamma);
    })?;

    let touch_animator = animator.clone();
    let touch_canvas = canvas.clone();
    let on_touch = Listener::with_options(window.as_ref(), "touchstart", false, Some(false), move |ev: web::Event| {
        let Some(te) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let Some(touch) = te.changed_touches().get(0) else {
            return;
        };
        let client = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
        let mut a = touch_animator.borrow_mut();
        let (_, hit) = pick(&a, &touch_canvas, client);
        a.click(hit, dom::now_ms());
    })?;

    Ok(vec![on_tilt, on_touch])
}
