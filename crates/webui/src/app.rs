use crate::{
    api::{ApiClient, Token, User},
    components::{
        drawing_list_page::DrawingListPage, health_badge::HealthBadge, login_page::LoginPage,
        not_found::NotFound, project_list_page::ProjectListPage, register_page::RegisterPage,
    },
};
use yew::prelude::*;
use yew_router::prelude::*;

/// Login session shared with every page through context.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub token: Option<Token>,
    pub user: Option<User>,
}

impl Session {
    pub fn signed_in(&self) -> bool {
        self.token.is_some()
    }
}

/// Handle pages use to read and replace the session.
pub type SessionHandle = UseStateHandle<Session>;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/projects/:project_id")]
    ProjectDrawings { project_id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn render(route: Route) -> Html {
        match route {
            Route::Home => html! { <ProjectListPage /> },
            Route::Login => html! { <LoginPage /> },
            Route::Register => html! { <RegisterPage /> },
            Route::ProjectDrawings { project_id } => html! { <DrawingListPage {project_id} /> },
            Route::NotFound => html! { <NotFound /> },
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct AppProps {
    pub api: ApiClient,
}

#[function_component(App)]
pub fn app(AppProps { api }: &AppProps) -> Html {
    let session = use_state(Session::default);

    let on_sign_out = {
        let session = session.clone();
        Callback::from(move |_| session.set(Session::default()))
    };

    // Token without a resolved user still counts as signed in; the `/me`
    // lookup may have failed independently of login.
    let account_label = session
        .user
        .as_ref()
        .map_or_else(|| "account".to_string(), |user| user.email.clone());

    html! {
        <ContextProvider<ApiClient> context={api.clone()}>
            <ContextProvider<SessionHandle> context={session.clone()}>
                <div class="container">
                    <BrowserRouter>
                        <nav>
                            <Link<Route> to={Route::Home}>
                                {"Projects"}
                            </Link<Route>>
                            {" "}
                            if session.signed_in() {
                                <span class="session-email">{account_label}</span>
                                <button class="link-button" onclick={on_sign_out}>
                                    {"Sign out"}
                                </button>
                            } else {
                                <Link<Route> to={Route::Login}>
                                    {"Sign in"}
                                </Link<Route>>
                                {" "}
                                <Link<Route> to={Route::Register}>
                                    {"Register"}
                                </Link<Route>>
                            }
                            <HealthBadge />
                        </nav>
                        <Switch<Route> render={Route::render} />
                    </BrowserRouter>
                </div>
            </ContextProvider<SessionHandle>>
        </ContextProvider<ApiClient>>
    }
}
