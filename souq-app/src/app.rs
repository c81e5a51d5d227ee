//! Application orchestrator
//!
//! Wires the session and navigation controllers to per-screen state. Entering
//! a screen constructs its state and leaving drops it, so the main screen's
//! poller stops on exit and a fetch that resolves after navigating away has
//! nothing left to touch.

use std::sync::Arc;

use shared::models::StoreInfo;
use souq_client::{ApiClient, ClientConfig};

use crate::navigation::{NavRequest, NavigationController, Screen};
use crate::screens::{
    AddShortageScreen, LoginScreen, MainScreen, NotificationsScreen, ShortageListScreen,
};
use crate::session::{SessionController, SessionState};

/// State for the currently mounted screen.
#[derive(Debug)]
pub enum ScreenState {
    Login(LoginScreen),
    Main(MainScreen),
    AddShortage(AddShortageScreen),
    ShortageList(ShortageListScreen),
    Notifications(NotificationsScreen),
}

pub struct App {
    api: Arc<ApiClient>,
    session: SessionController,
    navigation: NavigationController,
    screen: ScreenState,
}

impl App {
    pub fn new(config: &ClientConfig) -> Self {
        let api = Arc::new(config.build_client());
        Self {
            session: SessionController::new(api.clone()),
            navigation: NavigationController::new(),
            screen: ScreenState::Login(LoginScreen::new()),
            api,
        }
    }

    pub fn session_state(&self) -> &SessionState {
        self.session.state()
    }

    pub fn current_store(&self) -> Option<&StoreInfo> {
        self.session.current_store()
    }

    pub fn current_screen(&self) -> Screen {
        self.navigation.current()
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut ScreenState {
        &mut self.screen
    }

    /// Run the initial session check and land on main or login.
    pub async fn start(&mut self) -> Screen {
        if self.session.check().await {
            self.navigate(NavRequest::To(Screen::Main)).await
        } else {
            Screen::Login
        }
    }

    /// Log in using the mounted login screen's credentials; on success the
    /// app routes to the main screen.
    pub async fn login(&mut self) -> bool {
        let logged_in = match &mut self.screen {
            ScreenState::Login(login) => login.submit(&mut self.session).await,
            _ => false,
        };

        if logged_in {
            self.navigate(NavRequest::To(Screen::Main)).await;
        }
        logged_in
    }

    /// Handle a navigation request from the active screen.
    ///
    /// A logout request ends the session first, so the gate in the navigation
    /// controller routes to the login screen. Data screens load on entry.
    pub async fn navigate(&mut self, request: NavRequest) -> Screen {
        if matches!(request, NavRequest::Logout) {
            self.session.logout().await;
        }

        let previous = self.navigation.current();
        let next = self
            .navigation
            .navigate(request, self.session.is_authenticated());

        if next != previous {
            self.enter(next);
            self.load_active_screen().await;
        }
        next
    }

    /// Replace the active screen state.
    ///
    /// The previous state is dropped here; the main screen's poller is
    /// cancelled explicitly on the way out.
    fn enter(&mut self, screen: Screen) {
        let state = match screen {
            Screen::Login => ScreenState::Login(LoginScreen::new()),
            Screen::Main => ScreenState::Main(MainScreen::mount(self.api.clone())),
            Screen::AddShortage => ScreenState::AddShortage(AddShortageScreen::new(self.api.clone())),
            Screen::ShortageList => {
                ScreenState::ShortageList(ShortageListScreen::new(self.api.clone()))
            }
            Screen::Notifications => {
                ScreenState::Notifications(NotificationsScreen::new(self.api.clone()))
            }
        };

        let previous = std::mem::replace(&mut self.screen, state);
        if let ScreenState::Main(main) = previous {
            main.unmount();
        }
    }

    /// Initial data fetch for screens that load on entry.
    async fn load_active_screen(&mut self) {
        match &mut self.screen {
            ScreenState::ShortageList(screen) => {
                screen.load().await;
            }
            ScreenState::Notifications(screen) => {
                screen.load().await;
            }
            _ => {}
        }
    }
}
