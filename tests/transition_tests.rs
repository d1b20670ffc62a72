// Host-side tests for the page-transition shutter and the overlay-menu
// hand-off, both of which pass state across page loads in session storage.

use folio_core::menu::{record_departure, MenuHandoff, MenuStep, MENU_FLAG_KEY, ORIGIN_PAGE_KEY};
use folio_core::shutter::{
    ClickOutcome, CoverAction, LinkTarget, Shutter, ShutterPhase, TRANSITION_FLAG_KEY,
};
use folio_core::{Breakpoint, KeyValueStore, MemoryStore};

fn link(href: &str) -> LinkTarget {
    LinkTarget {
        href: href.to_owned(),
        hash: String::new(),
        same_origin: true,
        same_path: false,
        same_url: false,
    }
}

fn flagged_store() -> MemoryStore {
    let mut s = MemoryStore::new();
    s.set(TRANSITION_FLAG_KEY, "1").unwrap();
    s
}

#[test]
fn arriving_with_flag_plays_reveal_and_clears_it() {
    let mut store = flagged_store();
    let mut sh = Shutter::new();
    assert!(sh.on_load(&mut store, Breakpoint::Desktop));
    assert_eq!(sh.phase(), ShutterPhase::Revealing);
    assert!(store.contains(TRANSITION_FLAG_KEY));

    sh.reveal_finished(&mut store);
    assert_eq!(sh.phase(), ShutterPhase::Idle);
    assert!(!store.contains(TRANSITION_FLAG_KEY));
}

#[test]
fn mobile_load_clears_flag_without_reveal() {
    let mut store = flagged_store();
    let mut sh = Shutter::new();
    assert!(!sh.on_load(&mut store, Breakpoint::Mobile));
    assert_eq!(sh.phase(), ShutterPhase::Idle);
    assert!(store.is_empty());
}

#[test]
fn plain_load_stays_idle() {
    let mut store = MemoryStore::new();
    let mut sh = Shutter::new();
    assert!(!sh.on_load(&mut store, Breakpoint::Desktop));
    assert!(!sh.is_animating());
}

#[test]
fn internal_link_covers_then_navigates() {
    let mut store = MemoryStore::new();
    let mut sh = Shutter::new();
    assert_eq!(
        sh.click(link("https://site/work.html"), Breakpoint::Desktop, 0.0),
        ClickOutcome::Cover
    );
    assert_eq!(sh.phase(), ShutterPhase::Covering);
    assert_eq!(
        sh.cover_finished(&mut store),
        Some(CoverAction::Navigate {
            href: "https://site/work.html".into()
        })
    );
    assert_eq!(sh.phase(), ShutterPhase::Covered);
    assert_eq!(store.get(TRANSITION_FLAG_KEY).as_deref(), Some("1"));
}

#[test]
fn clicks_while_animating_are_swallowed() {
    let mut sh = Shutter::new();
    sh.click(link("/a"), Breakpoint::Desktop, 0.0);
    assert_eq!(sh.click(link("/b"), Breakpoint::Desktop, 10.0), ClickOutcome::Swallow);
}

#[test]
fn external_and_mobile_clicks_pass_through() {
    let mut sh = Shutter::new();
    let external = LinkTarget {
        same_origin: false,
        ..link("https://elsewhere/")
    };
    assert_eq!(sh.click(external, Breakpoint::Desktop, 0.0), ClickOutcome::PassThrough);
    assert_eq!(sh.click(link("/a"), Breakpoint::Mobile, 0.0), ClickOutcome::PassThrough);
    assert_eq!(sh.phase(), ShutterPhase::Idle);
}

#[test]
fn same_url_reloads() {
    let mut store = MemoryStore::new();
    let mut sh = Shutter::new();
    let target = LinkTarget {
        same_path: true,
        same_url: true,
        ..link("https://site/")
    };
    sh.click(target, Breakpoint::Desktop, 0.0);
    assert_eq!(sh.cover_finished(&mut store), Some(CoverAction::Reload));
    assert!(store.contains(TRANSITION_FLAG_KEY));
}

#[test]
fn same_page_hash_reveals_in_place_without_flag() {
    let mut store = MemoryStore::new();
    let mut sh = Shutter::new();
    let target = LinkTarget {
        hash: "#contact".into(),
        same_path: true,
        ..link("https://site/#contact")
    };
    assert!(target.is_same_page_hash());
    sh.click(target, Breakpoint::Desktop, 0.0);
    assert_eq!(
        sh.cover_finished(&mut store),
        Some(CoverAction::RevealInPlace {
            hash: "#contact".into()
        })
    );
    assert_eq!(sh.phase(), ShutterPhase::Revealing);
    assert!(!store.contains(TRANSITION_FLAG_KEY));
    sh.reveal_finished(&mut store);
    assert_eq!(sh.phase(), ShutterPhase::Idle);
}

#[test]
fn fallback_resets_stuck_cover() {
    let mut store = MemoryStore::new();
    let mut sh = Shutter::new();
    sh.click(link("/a"), Breakpoint::Desktop, 1000.0);
    assert!(!sh.check_fallback(3399.0, &mut store));
    assert!(sh.check_fallback(3400.0, &mut store));
    assert_eq!(sh.phase(), ShutterPhase::Idle);
    assert!(sh.cover_finished(&mut store).is_none());
}

#[test]
fn cover_finished_outside_cover_is_ignored() {
    let mut store = MemoryStore::new();
    let mut sh = Shutter::new();
    assert!(sh.cover_finished(&mut store).is_none());
}

#[test]
fn menu_handoff_round_trip() {
    let mut store = MemoryStore::new();
    record_departure(&mut store, Some("Home"));
    assert_eq!(store.get(MENU_FLAG_KEY).as_deref(), Some("true"));

    let (mut handoff, steps) = MenuHandoff::arrive(&mut store, Some("Work".into()), 0.0).unwrap();
    assert_eq!(
        steps.as_slice(),
        &[MenuStep::OpenInstantly, MenuStep::Highlight("Home".into())]
    );
    assert!(!store.contains(MENU_FLAG_KEY));
    assert!(!store.contains(ORIGIN_PAGE_KEY));

    assert!(handoff.poll(499.0).is_empty());
    assert_eq!(handoff.poll(500.0).as_slice(), &[MenuStep::Close]);
    assert!(handoff.poll(1000.0).is_empty());
    assert_eq!(
        handoff.poll(1500.0).as_slice(),
        &[MenuStep::FinishSetup, MenuStep::Highlight("Work".into())]
    );
    assert!(handoff.is_done());
    assert!(handoff.poll(3000.0).is_empty());
}

#[test]
fn origin_page_does_not_leak_into_next_handoff() {
    let mut store = MemoryStore::new();
    record_departure(&mut store, Some("Home"));
    MenuHandoff::arrive(&mut store, Some("Work".into()), 0.0).unwrap();

    // Leaving from a page with no active entry records no origin.
    record_departure(&mut store, None);
    let (_, steps) = MenuHandoff::arrive(&mut store, Some("About".into()), 5000.0).unwrap();
    assert_eq!(steps.as_slice(), &[MenuStep::OpenInstantly]);
    assert!(store.is_empty());
}

#[test]
fn menu_handoff_needs_flag() {
    let mut store = MemoryStore::new();
    store.set(ORIGIN_PAGE_KEY, "Home").unwrap();
    assert!(MenuHandoff::arrive(&mut store, None, 0.0).is_none());
}

#[test]
fn late_poll_emits_every_due_step() {
    let mut store = MemoryStore::new();
    record_departure(&mut store, None);
    let (mut handoff, steps) = MenuHandoff::arrive(&mut store, None, 0.0).unwrap();
    assert_eq!(steps.as_slice(), &[MenuStep::OpenInstantly]);
    assert_eq!(
        handoff.poll(2000.0).as_slice(),
        &[MenuStep::Close, MenuStep::FinishSetup]
    );
}
