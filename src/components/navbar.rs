use yew::prelude::*;

use super::app::Screen;
use crate::hooks::use_session;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub active: Screen,
    pub on_navigate: Callback<Screen>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let session = use_session();

    let link = |screen: Screen, label: &str| {
        let on_navigate = props.on_navigate.clone();
        let class = if props.active == screen {
            "nav-link active"
        } else {
            "nav-link"
        };
        html! {
            <button {class} onclick={Callback::from(move |_| on_navigate.emit(screen))}>
                {label}
            </button>
        }
    };

    let on_logout = {
        let session = session.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| {
            session.clear();
            on_navigate.emit(Screen::Login);
        })
    };

    html! {
        <nav class="navbar">
            <div class="brand">{"Dukani"}</div>

            <div class="nav-links">
                { link(Screen::Dashboard, "Dashboard") }
                { link(Screen::Products, "Products") }
                { link(Screen::Sales, "Sales") }
                { link(Screen::Purchases, "Purchases") }
            </div>

            <div class="nav-user">
                {
                    match session.current() {
                        Some(active) => html! {
                            <>
                                <span class="welcome">{format!("Welcome, {}", active.user.username)}</span>
                                <button class="btn-logout" onclick={on_logout}>{"Logout"}</button>
                            </>
                        },
                        None => link(Screen::Login, "Login"),
                    }
                }
            </div>
        </nav>
    }
}
