use yew::prelude::*;

use super::{
    DashboardScreen, LoginScreen, Navbar, ProductsScreen, PurchasesScreen, RegisterScreen,
    SalesScreen,
};
use crate::hooks::{use_session, SessionProvider};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    Login,
    Register,
    Dashboard,
    Products,
    Sales,
    Purchases,
}

impl Screen {
    /// Everything except the auth entry points needs a session.
    pub fn is_protected(self) -> bool {
        !matches!(self, Screen::Login | Screen::Register)
    }
}

/// The session gate: a protected screen without a session resolves to the
/// login entry point. Presence of the token is the only check.
pub fn resolve_screen(requested: Screen, authenticated: bool) -> Screen {
    if requested.is_protected() && !authenticated {
        Screen::Login
    } else {
        requested
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <Shell />
        </SessionProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let session = use_session();
    let requested = use_state(|| Screen::Dashboard);

    let active = resolve_screen(*requested, session.is_authenticated());

    let navigate = {
        let requested = requested.clone();
        Callback::from(move |screen: Screen| requested.set(screen))
    };

    let on_login = {
        let navigate = navigate.clone();
        Callback::from(move |_| navigate.emit(Screen::Dashboard))
    };
    let on_registered = {
        let navigate = navigate.clone();
        Callback::from(move |_| navigate.emit(Screen::Login))
    };
    let show_register = {
        let navigate = navigate.clone();
        Callback::from(move |_| navigate.emit(Screen::Register))
    };
    let show_login = {
        let navigate = navigate.clone();
        Callback::from(move |_| navigate.emit(Screen::Login))
    };

    html! {
        <>
            <Navbar active={active} on_navigate={navigate.clone()} />
            <main class="screen">
                {
                    match active {
                        Screen::Login => html! {
                            <LoginScreen on_success={on_login} on_show_register={show_register} />
                        },
                        Screen::Register => html! {
                            <RegisterScreen on_registered={on_registered} on_show_login={show_login} />
                        },
                        Screen::Dashboard => html! { <DashboardScreen /> },
                        Screen::Products => html! { <ProductsScreen /> },
                        Screen::Sales => html! { <SalesScreen /> },
                        Screen::Purchases => html! { <PurchasesScreen /> },
                    }
                }
            </main>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_screens_redirect_to_login() {
        for screen in [Screen::Dashboard, Screen::Products, Screen::Sales, Screen::Purchases] {
            assert_eq!(resolve_screen(screen, false), Screen::Login);
            assert_eq!(resolve_screen(screen, true), screen);
        }
    }

    #[test]
    fn auth_screens_never_redirect() {
        assert_eq!(resolve_screen(Screen::Login, false), Screen::Login);
        assert_eq!(resolve_screen(Screen::Register, false), Screen::Register);
        assert_eq!(resolve_screen(Screen::Login, true), Screen::Login);
    }
}
