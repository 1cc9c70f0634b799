//! Login screen.

use leptos::prelude::*;

use crate::ui::components::{
    AlertCircleIcon, Button, ButtonSize, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Input, LockIcon,
};

/// Sign-in form posting to the external authentication endpoint.
#[component]
pub fn LoginPage(
    /// Form action URL.
    #[prop(into)]
    login_url: String,
    /// Message from a previous failed attempt.
    #[prop(optional_no_strip)]
    error: Option<String>,
) -> impl IntoView {
    view! {
        <main class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center p-4">
            <Card class="w-full max-w-md shadow-xl border-0">
                <CardHeader class="items-center text-center">
                    <LockIcon class="h-8 w-8 text-blue-600" />
                    <CardTitle class="text-2xl">"Credit Scoring System"</CardTitle>
                    <CardDescription class="text-base">"Sign in to your account"</CardDescription>
                </CardHeader>
                <CardContent class="space-y-6">
                    {error
                        .map(|message| {
                            view! {
                                <div
                                    class="flex items-start gap-3 rounded-md border border-red-200 bg-red-50 p-4 text-sm text-red-800"
                                    role="alert"
                                >
                                    <AlertCircleIcon class="mt-0.5 h-5 w-5 text-red-600" />
                                    <div>
                                        <p class="font-medium">"Login Failed"</p>
                                        <p>{message}</p>
                                    </div>
                                </div>
                            }
                        })}
                    <form method="post" action=login_url class="space-y-4">
                        <Input
                            label="Username"
                            id="username"
                            name="username"
                            placeholder="Enter your username"
                            autocomplete="username"
                            required=true
                        />
                        <Input
                            input_type="password"
                            label="Password"
                            id="password"
                            name="password"
                            placeholder="Enter your password"
                            autocomplete="current-password"
                            required=true
                        />
                        <Button button_type="submit" size=ButtonSize::Lg class="w-full">
                            "Sign In"
                        </Button>
                    </form>
                </CardContent>
            </Card>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    #[test]
    fn test_login_form_posts_to_configured_url() {
        let html = render_html(|| view! { <LoginPage login_url="/auth/login" /> });
        assert!(html.contains("action=\"/auth/login\""));
        assert!(html.contains("name=\"username\""));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("Sign In"));
        assert!(!html.contains("Login Failed"));
    }

    #[test]
    fn test_login_error_banner() {
        let html = render_html(|| {
            view! {
                <LoginPage login_url="/auth/login" error=Some("Invalid credentials".to_string()) />
            }
        });
        assert!(html.contains("Login Failed"));
        assert!(html.contains("Invalid credentials"));
    }

    #[test]
    fn test_login_without_error_from_query() {
        let error: Option<String> = None;
        let html = render_html(move || view! { <LoginPage login_url="/auth/login" error=error /> });
        assert!(!html.contains("Login Failed"));
        assert!(!html.contains("role=\"alert\""));
    }
}
