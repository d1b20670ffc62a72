// Host-side tests for the theme toggle, scroll-driven chrome and flip coin.

use folio_core::coin::{CoinStep, FlipCoin};
use folio_core::scroll::{format_uptime, progress_percent, NavAutoHide};
use folio_core::theme::{Theme, ThemePolicy, THEME_KEY};
use folio_core::{KeyValueStore, MemoryStore};

#[test]
fn persisted_theme_round_trips() {
    let mut store = MemoryStore::new();
    assert_eq!(ThemePolicy::Persist.load(&mut store), Theme::Dark);

    assert_eq!(ThemePolicy::Persist.toggled(false, &mut store), Theme::Light);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    assert_eq!(ThemePolicy::Persist.load(&mut store), Theme::Light);

    assert_eq!(ThemePolicy::Persist.toggled(true, &mut store), Theme::Dark);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn force_dark_discards_stored_choice() {
    let mut store = MemoryStore::new();
    store.set(THEME_KEY, "light").unwrap();
    assert_eq!(ThemePolicy::ForceDark.load(&mut store), Theme::Dark);
    assert!(!store.contains(THEME_KEY));
    assert_eq!(ThemePolicy::ForceDark.toggled(false, &mut store), Theme::Dark);
    assert!(store.is_empty());
}

#[test]
fn theme_parsing_and_toggle_mapping() {
    assert_eq!(Theme::parse("light"), Theme::Light);
    assert_eq!(Theme::parse("sepia"), Theme::Dark);
    assert!(Theme::Dark.toggle_checked());
    assert!(!Theme::Light.toggle_checked());
    assert_eq!(Theme::from_toggle(true), Theme::Dark);
}

#[test]
fn navbar_hides_down_shows_up() {
    let mut nav = NavAutoHide::new(0.0);
    assert!(nav.on_scroll());
    assert!(!nav.on_scroll());
    assert_eq!(nav.update(10.0), None);
    assert!(nav.on_scroll());

    assert_eq!(nav.update(100.0), Some(true));
    assert_eq!(nav.update(150.0), None);
    assert!(nav.is_hidden());
    assert_eq!(nav.update(140.0), Some(false));
    assert_eq!(nav.update(140.0), None);

    nav.update(200.0);
    assert_eq!(nav.update(15.0), Some(false));
}

#[test]
fn progress_is_clamped_percent() {
    assert_eq!(progress_percent(500.0, 2000.0, 1000.0), 50.0);
    assert_eq!(progress_percent(5000.0, 2000.0, 1000.0), 100.0);
    assert_eq!(progress_percent(-10.0, 2000.0, 1000.0), 0.0);
    assert_eq!(progress_percent(100.0, 800.0, 1000.0), 0.0);
}

#[test]
fn uptime_formats_hours_minutes_seconds() {
    assert_eq!(format_uptime(0.0), "00:00:00");
    assert_eq!(format_uptime(3_723_000.0), "01:02:03");
    assert_eq!(format_uptime(999.0), "00:00:00");
    assert_eq!(format_uptime(100.0 * 3_600_000.0), "100:00:00");
    assert_eq!(format_uptime(-5.0), "00:00:00");
}

#[test]
fn coin_shows_after_threshold() {
    let mut coin = FlipCoin::new();
    assert_eq!(coin.on_scroll(300.0), None);
    assert_eq!(coin.on_scroll(301.0), Some(true));
    assert_eq!(coin.on_scroll(800.0), None);
    assert_eq!(coin.on_scroll(0.0), Some(false));
}

#[test]
fn coin_flip_settles_then_rests() {
    let mut coin = FlipCoin::new();
    assert!(coin.click(0.0));
    assert!(!coin.click(100.0));
    assert!(coin.tick(1499.0).is_empty());
    assert_eq!(coin.tick(1500.0).as_slice(), &[CoinStep::Settle]);
    assert!(coin.tick(1849.0).is_empty());
    assert_eq!(coin.tick(1850.0).as_slice(), &[CoinStep::Rest]);
    assert!(coin.is_idle());
}

#[test]
fn late_coin_tick_emits_both_steps() {
    let mut coin = FlipCoin::new();
    coin.click(0.0);
    assert_eq!(coin.tick(5000.0).as_slice(), &[CoinStep::Settle, CoinStep::Rest]);
    assert!(coin.is_idle());
}
