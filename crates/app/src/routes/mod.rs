pub mod admin;
pub mod alerts;
pub mod case_studies;
pub mod dashboard;
pub mod facilitator;
pub mod learning;
pub mod not_found;
pub mod sign_in;
pub mod students;
pub mod templates;

use crate::auth::{profile_labels, sign_out, use_auth};
use crate::Services;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdBriefcase, LdContrast, LdFolder, LdLayoutDashboard, LdLogOut,
    LdSettings, LdShield, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{evaluate, roles, AccessDecision, AccessDenial, AppError, RouteGuard};
use shared_ui::theme::ThemeState;
use shared_ui::{Button, ButtonVariant, EmptyState};

use admin::Admin;
use alerts::Alerts;
use case_studies::{CaseStudyDetail, CaseStudyList};
use dashboard::Dashboard;
use facilitator::FacilitatorTools;
use learning::Learning;
use not_found::NotFound;
use sign_in::SignIn;
use students::{StudentDetail, StudentList};
use templates::Templates;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/auth?:redirect")]
    SignIn { redirect: Option<String> },
    #[layout(ProtectedRoute)]
    #[layout(AppLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/students")]
        StudentList {},
        #[route("/students/:id")]
        StudentDetail { id: String },
        #[route("/alerts")]
        Alerts {},
        #[route("/case-studies")]
        CaseStudyList {},
        #[route("/case-studies/:id")]
        CaseStudyDetail { id: String },
        #[route("/learning")]
        Learning {},
        #[route("/templates")]
        Templates {},
        #[route("/facilitator")]
        FacilitatorTools {},
        #[route("/admin")]
        Admin {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Access requirement for this route. Routes outside the protected
    /// layout are never evaluated against theirs.
    pub fn guard(&self) -> RouteGuard {
        let guard = RouteGuard::authenticated(self.to_string());
        match self {
            Route::FacilitatorTools {} => guard.requiring(roles::FACILITATOR),
            Route::Admin {} => guard.requiring(roles::ADMIN),
            _ => guard,
        }
    }

    fn page_title(&self) -> &'static str {
        match self {
            Route::Dashboard {} => "Dashboard",
            Route::StudentList {} | Route::StudentDetail { .. } => "Students",
            Route::Alerts {} => "Quality Alerts",
            Route::CaseStudyList {} | Route::CaseStudyDetail { .. } => "Case Studies",
            Route::Learning {} => "Learning",
            Route::Templates {} => "Plan Templates",
            Route::FacilitatorTools {} => "Facilitator Tools",
            Route::Admin {} => "Administration",
            Route::SignIn { .. } => "Sign In",
            Route::NotFound { .. } => "",
        }
    }
}

/// Where a gate redirect sends the visitor. The sign-in page remembers
/// `from` so it can return there afterwards.
pub fn redirect_route(target: &str, from: &str) -> Route {
    match target.parse::<Route>() {
        Ok(Route::SignIn { .. }) | Err(_) => Route::SignIn {
            redirect: Some(from.to_string()),
        },
        Ok(route) => route,
    }
}

/// Destination after a successful sign-in.
pub fn post_sign_in_route(redirect: Option<&str>) -> Route {
    redirect
        .and_then(|path| path.parse::<Route>().ok())
        .filter(|route| !matches!(route, Route::SignIn { .. } | Route::NotFound { .. }))
        .unwrap_or(Route::Dashboard {})
}

/// Gate in front of every authenticated page.
///
/// The decision is recomputed on every render from the current session, so
/// a session that finishes loading or signs out is reflected immediately.
/// Withheld views describe themselves through the decision's [`AccessDenial`].
#[component]
fn ProtectedRoute() -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let guard = route.guard();
    let decision = evaluate(&auth.session.read(), &guard);

    if let AccessDecision::RedirectTo(target) = &decision {
        tracing::debug!(from = %guard.path, to = %target, "redirecting unauthenticated visitor");
        navigator().replace(redirect_route(target, &guard.path));
    }

    let Some(denial) = decision.denial() else {
        return rsx! { Outlet::<Route> {} };
    };

    match denial {
        AccessDenial::SessionUnresolved => {
            let error = AppError::from(denial);
            rsx! {
                div { class: "gate-status", "aria-busy": "true",
                    p { "Loading..." }
                    p { class: "gate-status-detail", "{error.message}" }
                }
            }
        }
        AccessDenial::Unauthorized => {
            let error = AppError::from(denial);
            rsx! {
                div { class: "gate-status",
                    p { "{error.user_message()}" }
                    p { class: "gate-status-detail", "Redirecting to sign in..." }
                }
            }
        }
        AccessDenial::Forbidden { .. } => {
            let error = AppError::from(denial);
            tracing::info!(path = %guard.path, error = %error, "route forbidden");
            rsx! { Forbidden { error: error } }
        }
    }
}

/// Permission-denied view for an authenticated user without the route's role.
#[component]
fn Forbidden(error: AppError) -> Element {
    rsx! {
        div { class: "gate-forbidden",
            EmptyState {
                title: "Access denied",
                message: error.user_message(),
                actions: rsx! {
                    Link { to: Route::Dashboard {}, class: "button-link",
                        "Back to Dashboard"
                    }
                },
            }
        }
    }
}

#[component]
fn NavItem(to: Route, active: bool, label: String, children: Element) -> Element {
    rsx! {
        li { class: "nav-item",
            Link {
                to: to,
                class: if active { "nav-link active" } else { "nav-link" },
                {children}
                span { "{label}" }
            }
        }
    }
}

/// Main app layout with sidebar navigation and a top bar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let auth = use_auth();
    let services: Services = use_context();
    let mut theme: ThemeState = use_context();

    let session = auth.session.read().clone();
    let (display_name, initials) = profile_labels(&session);
    let role = session.user().map(|u| u.role.clone()).unwrap_or_default();
    let theme_label = theme.mode.read().next().display_name();

    rsx! {
        div { class: "app-shell",
            aside { class: "sidebar",
                div { class: "sidebar-brand",
                    span { class: "sidebar-brand-name", "MyGoodLife" }
                }
                nav { aria_label: "Main",
                    ul { class: "nav-list",
                        NavItem { to: Route::Dashboard {}, active: matches!(route, Route::Dashboard {}), label: "Dashboard",
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                        }
                        NavItem { to: Route::StudentList {}, active: matches!(route, Route::StudentList {} | Route::StudentDetail { .. }), label: "Students",
                            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                        }
                        NavItem { to: Route::Alerts {}, active: matches!(route, Route::Alerts {}), label: "Alerts",
                            Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                        }
                        NavItem { to: Route::CaseStudyList {}, active: matches!(route, Route::CaseStudyList {} | Route::CaseStudyDetail { .. }), label: "Case Studies",
                            Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
                        }
                        NavItem { to: Route::Learning {}, active: matches!(route, Route::Learning {}), label: "Learning",
                            Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
                        }
                        NavItem { to: Route::Templates {}, active: matches!(route, Route::Templates {}), label: "Templates",
                            Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 }
                        }
                        if role == roles::FACILITATOR {
                            NavItem { to: Route::FacilitatorTools {}, active: matches!(route, Route::FacilitatorTools {}), label: "Facilitator Tools",
                                Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                            }
                        }
                        if role == roles::ADMIN {
                            NavItem { to: Route::Admin {}, active: matches!(route, Route::Admin {}), label: "Admin",
                                Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                            }
                        }
                    }
                }
            }

            div { class: "app-main",
                header { class: "topbar",
                    h1 { class: "topbar-title", "{route.page_title()}" }
                    div { class: "topbar-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| theme.cycle(),
                            Icon::<LdContrast> { icon: LdContrast, width: 16, height: 16 }
                            span { class: "sr-only", "Switch to {theme_label} theme" }
                        }
                        div { class: "topbar-user",
                            span { class: "avatar", title: "{display_name}", "{initials}" }
                            span { class: "topbar-user-name", "{display_name}" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| sign_out(auth, services.sessions.clone()),
                            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                            "Sign out"
                        }
                    }
                }
                main { class: "app-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
