use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use snapdeck_core::gesture::{
    ClickOrigin, KeyboardAdapter, LinkAdapter, MenuHost, TouchAdapter, WheelAdapter,
};
use snapdeck_core::report::{NavElevation, UiSync, VisibilityCorrector};
use snapdeck_core::{AppConfig, Clock, Deck, Navigator, PositionChange, SystemClock};
use tracing::{debug, info};

use crate::input::Action;
use crate::layout::{self, DeckLayout, HitMap, HitTarget};
use crate::scroll::ScrollTick;
use crate::theme::Theme;
use crate::viewport::Viewport;

/// Open/closed state of the section menu
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    pub open: bool,
    pub cursor: usize,
}

impl MenuState {
    pub fn close(&mut self) {
        self.open = false;
    }

    fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }
}

impl MenuHost for MenuState {
    fn toggle_menu(&mut self) {
        self.open = !self.open;
        if self.open {
            self.cursor = 0;
        }
    }
}

/// Presentation state
pub struct App<C: Clock = SystemClock> {
    pub deck: Deck,
    pub theme: Theme,
    pub navigator: Navigator<Viewport, C>,
    pub menu: MenuState,
    pub should_quit: bool,
    ui: Rc<RefCell<UiSync>>,
    links: LinkAdapter,
    wheel: WheelAdapter,
    keyboard: KeyboardAdapter,
    touch: TouchAdapter,
    corrector: VisibilityCorrector,
    elevation: NavElevation,
    hits: HitMap,
    cell_height_px: f64,
    show_dots: bool,
}

impl App<SystemClock> {
    pub fn new(deck: Deck, config: &AppConfig, theme: Theme) -> snapdeck_core::Result<Self> {
        Self::with_clock(deck, config, theme, SystemClock)
    }
}

impl<C: Clock> App<C> {
    pub fn with_clock(
        deck: Deck,
        config: &AppConfig,
        theme: Theme,
        clock: C,
    ) -> snapdeck_core::Result<Self> {
        deck.validate()?;
        let count = deck.len();
        let nav_config = &config.navigation;

        let viewport = Viewport::new(count, config.ui.scroll.clone());
        let mut navigator = Navigator::new(count, viewport)?
            .with_policy(nav_config.settle_policy())
            .with_clock(clock);

        let ui = Rc::new(RefCell::new(UiSync::new(count)));
        let sink = ui.clone();
        navigator.subscribe(move |change: &PositionChange| sink.borrow_mut().apply(change));
        navigator.announce();

        info!(sections = count, title = %deck.title, "presentation ready");

        Ok(Self {
            links: deck.link_adapter(),
            deck,
            theme,
            navigator,
            menu: MenuState::default(),
            should_quit: false,
            ui,
            wheel: WheelAdapter,
            keyboard: KeyboardAdapter,
            touch: TouchAdapter::new(nav_config.touch_threshold_px),
            corrector: VisibilityCorrector::new(count, nav_config.visibility_threshold),
            elevation: NavElevation::new(nav_config.elevate_offset),
            hits: HitMap::default(),
            cell_height_px: config.ui.cell_height_px.max(1) as f64,
            show_dots: config.ui.show_dots,
        })
    }

    /// Indicator and progress model
    pub fn ui(&self) -> Ref<'_, UiSync> {
        self.ui.borrow()
    }

    /// Fragment resolver for the deck's sections
    pub fn links(&self) -> &LinkAdapter {
        &self.links
    }

    pub fn is_elevated(&self) -> bool {
        self.elevation.is_elevated()
    }

    pub fn is_busy(&self) -> bool {
        self.navigator.is_busy()
    }

    /// Whether the next frame should come at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.navigator.host().is_animating() || self.navigator.is_busy()
    }

    /// Compute the layout for `area`, fit sections to the body and rebuild
    /// the click targets
    pub fn update_layout(&mut self, area: Rect) -> DeckLayout {
        let frame_layout = DeckLayout::new(area, self.show_dots);
        let anchor = self.navigator.current_index();
        self.navigator.host_mut().resize(frame_layout.body.height, anchor);

        self.hits.clear();
        for (i, rect) in layout::nav_link_areas(frame_layout.nav, &self.deck.title, &self.deck.nav)
            .into_iter()
            .enumerate()
        {
            self.hits.push(rect, HitTarget::NavLink(i));
        }
        if let Some(dots) = frame_layout.dots {
            let active = self.navigator.current_index();
            for (index, rect) in layout::dot_areas(dots, self.deck.len(), active) {
                self.hits.push(rect, HitTarget::Dot(index));
            }
        }
        if self.menu.open {
            let links = self.deck.menu_links();
            let menu = layout::menu_area(area, links);
            for (i, rect) in layout::menu_entry_areas(menu, links.len()).into_iter().enumerate() {
                self.hits.push(rect, HitTarget::MenuLink(i));
            }
        }
        frame_layout
    }

    /// Per-frame update: scroll animation, settle window, visibility
    /// correction and nav elevation
    pub fn tick(&mut self) {
        if self.navigator.host_mut().update() == ScrollTick::Finished {
            self.navigator.finish_transition();
        }
        self.navigator.poll_settle();

        let entries = self.navigator.host().visibility();
        self.corrector.observe(&entries, &mut self.navigator);

        let offset_px = self.navigator.host().offset() as f64 * self.cell_height_px;
        if self.elevation.update(offset_px) {
            debug!(elevated = self.elevation.is_elevated(), "nav bar elevation changed");
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Section(key) => {
                self.keyboard.handle(key, &mut self.navigator);
            }
            Action::ToggleMenu => self.menu.toggle_menu(),
            Action::CloseMenu => self.menu.close(),
            Action::MenuUp => {
                let len = self.deck.menu_links().len();
                self.menu.move_cursor(-1, len);
            }
            Action::MenuDown => {
                let len = self.deck.menu_links().len();
                self.menu.move_cursor(1, len);
            }
            Action::MenuSelect => self.follow_link(ClickOrigin::MobileMenu, self.menu.cursor),
            Action::None => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let y_px = mouse.row as f64 * self.cell_height_px;
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.wheel.handle(1.0, &mut self.navigator);
            }
            MouseEventKind::ScrollUp => {
                self.wheel.handle(-1.0, &mut self.navigator);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                match self.hits.at(mouse.column, mouse.row) {
                    Some(HitTarget::NavLink(i)) => self.follow_link(ClickOrigin::NavBar, i),
                    Some(HitTarget::MenuLink(i)) => self.follow_link(ClickOrigin::MobileMenu, i),
                    Some(HitTarget::Dot(i)) => self.navigator.go_to(i),
                    None if self.menu.open => {}
                    None => self.touch.start(y_px),
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.touch.move_to(y_px, &mut self.navigator);
            }
            MouseEventKind::Up(MouseButton::Left) => self.touch.end(),
            _ => {}
        }
    }

    fn follow_link(&mut self, origin: ClickOrigin, index: usize) {
        let links = match origin {
            ClickOrigin::NavBar => self.deck.nav.as_slice(),
            ClickOrigin::MobileMenu => self.deck.menu_links(),
        };
        if let Some(link) = links.get(index) {
            self.links
                .handle(&link.href, origin, &mut self.navigator, &mut self.menu);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyModifiers;
    use snapdeck_core::gesture::Key;
    use snapdeck_core::{ManualClock, SettleMode};

    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn app(mode: SettleMode) -> (App<ManualClock>, ManualClock) {
        let mut config = AppConfig::default();
        config.ui.scroll.smooth_enabled = false;
        config.navigation.settle_mode = mode;
        let clock = ManualClock::new();
        let mut app = App::with_clock(Deck::sample(), &config, Theme::default(), clock.clone())
            .expect("valid sample deck");
        app.update_layout(AREA);
        app.tick();
        (app, clock)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn settle(app: &mut App<ManualClock>, clock: &ManualClock) {
        clock.advance(Duration::from_millis(800));
        app.tick();
    }

    #[test]
    fn test_keyboard_moves_viewport_and_indicators() {
        let (mut app, clock) = app(SettleMode::Timer);
        app.handle_action(Action::Section(Key::Space));
        app.tick();

        assert_eq!(app.navigator.current_index(), 1);
        assert_eq!(app.navigator.host().offset(), 21);
        assert_eq!(app.ui().indicators().active_index(), Some(1));
        assert!((app.ui().progress() - 50.0).abs() < 1e-9);
        assert!(app.is_elevated());

        app.handle_action(Action::Section(Key::End));
        assert_eq!(app.navigator.current_index(), 1);

        settle(&mut app, &clock);
        app.handle_action(Action::Section(Key::End));
        assert_eq!(app.navigator.current_index(), 3);
    }

    #[test]
    fn test_wheel_and_drag() {
        let (mut app, clock) = app(SettleMode::Timer);
        app.handle_mouse(mouse(MouseEventKind::ScrollDown, 10, 10));
        assert_eq!(app.navigator.current_index(), 1);
        settle(&mut app, &clock);

        // 3 rows at 16px is under the 50px threshold, 4 rows is over
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 15));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 12));
        assert_eq!(app.navigator.current_index(), 1);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 11));
        assert_eq!(app.navigator.current_index(), 2);
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 10, 11));
    }

    #[test]
    fn test_nav_link_click() {
        let (mut app, _) = app(SettleMode::Timer);
        // " snapdeck " then gap: "Welcome" at 12, "Keyboard" at 21, "Links" at 31
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 31, 0));
        assert_eq!(app.navigator.current_index(), 2);
        assert!(!app.menu.open);
    }

    #[test]
    fn test_dot_click() {
        let (mut app, _) = app(SettleMode::Timer);
        // 4 dots centered in rows 2..23 start at row 10, column 78
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 78, 13));
        assert_eq!(app.navigator.current_index(), 3);
        assert_eq!(app.ui().indicators().active_index(), Some(3));
    }

    #[test]
    fn test_dots_reach_every_section_of_a_long_deck() {
        let mut config = AppConfig::default();
        config.ui.scroll.smooth_enabled = false;
        let clock = ManualClock::new();
        let deck = Deck {
            title: "long".to_string(),
            sections: (0..30)
                .map(|i| snapdeck_core::Section {
                    id: format!("s{}", i),
                    title: String::new(),
                    body: String::new(),
                })
                .collect(),
            nav: Vec::new(),
            menu: None,
        };
        let mut app = App::with_clock(deck, &config, Theme::default(), clock.clone())
            .expect("valid deck");
        let dots = app.update_layout(AREA).dots.expect("dots shown");

        // 21 body rows, so the window shows sections 0..21 to start with
        assert_eq!(app.hits.at(78, dots.y), Some(HitTarget::Dot(0)));
        assert_eq!(app.hits.at(78, dots.y + 20), Some(HitTarget::Dot(20)));

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 78, dots.y + 20));
        assert_eq!(app.navigator.current_index(), 20);
        settle(&mut app, &clock);
        app.update_layout(AREA);

        // Window slid down to its end: sections 9..30
        assert_eq!(app.hits.at(78, dots.y), Some(HitTarget::Dot(9)));
        assert_eq!(app.hits.at(78, dots.y + 11), Some(HitTarget::Dot(20)));
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 78, dots.y + 20));
        assert_eq!(app.navigator.current_index(), 29);

        let active = app.ui().indicators().active_index().expect("one active dot");
        assert_eq!(active, 29);
        assert!(layout::dot_areas(dots, 30, active)
            .iter()
            .any(|&(index, _)| index == active));
    }

    #[test]
    fn test_menu_selection_navigates_and_closes() {
        let (mut app, _) = app(SettleMode::Timer);
        app.handle_action(Action::ToggleMenu);
        assert!(app.menu.open);
        app.handle_action(Action::MenuDown);
        app.handle_action(Action::MenuDown);
        app.handle_action(Action::MenuSelect);

        assert_eq!(app.navigator.current_index(), 2);
        assert!(!app.menu.open);
    }

    #[test]
    fn test_menu_click_uses_popup_rows() {
        let (mut app, _) = app(SettleMode::Timer);
        app.handle_action(Action::ToggleMenu);
        let area = layout::menu_area(AREA, app.deck.menu_links());
        app.update_layout(AREA);

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), area.x + 2, area.y + 4));
        assert_eq!(app.navigator.current_index(), 3);
        assert!(!app.menu.open);
    }

    #[test]
    fn test_instant_jump_completes_transition_in_animation_mode() {
        let (mut app, _) = app(SettleMode::Animation);
        app.handle_action(Action::Section(Key::ArrowDown));
        assert!(app.is_busy());
        app.tick();
        assert!(!app.is_busy());
        app.handle_action(Action::Section(Key::ArrowDown));
        assert_eq!(app.navigator.current_index(), 2);
    }

    #[test]
    fn test_quit() {
        let (mut app, _) = app(SettleMode::Timer);
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }
}
