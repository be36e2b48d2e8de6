use api_client::load_config;
use dioxus::prelude::*;
use shared_types::SessionProviderKind;
use shared_ui::components::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, PageHeader, PageTitle,
};

use crate::auth::use_auth;
use crate::client_platform;

fn provider_label(kind: SessionProviderKind) -> &'static str {
    match kind {
        SessionProviderKind::Remote => "Remote (backend session)",
        SessionProviderKind::Simulated => "Simulated (demo user)",
    }
}

/// Read-only view of the running configuration.
#[component]
pub fn Admin() -> Element {
    let config = load_config();
    let auth = use_auth();
    let user = auth.current_user();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Administration" }
            }

            Card {
                CardHeader {
                    CardTitle { "Configuration" }
                }
                CardContent {
                    dl { class: "detail-list",
                        dt { "API base URL" }
                        dd { code { "{config.api.base_url}" } }
                        dt { "Session provider" }
                        dd {
                            if config.session.provider == SessionProviderKind::Simulated {
                                Badge { variant: BadgeVariant::Warning, "{provider_label(config.session.provider)}" }
                            } else {
                                "{provider_label(config.session.provider)}"
                            }
                        }
                        dt { "Platform" }
                        dd { "{client_platform()}" }
                    }
                }
            }

            if let Some(user) = user {
                Card {
                    CardHeader {
                        CardTitle { "Signed in as" }
                    }
                    CardContent {
                        dl { class: "detail-list",
                            dt { "Name" }
                            dd { "{user.display_name}" }
                            dt { "Email" }
                            dd { "{user.email}" }
                            dt { "Role" }
                            dd { Badge { variant: BadgeVariant::Primary, "{user.role}" } }
                        }
                    }
                }
            }
        }
    }
}
