use std::fmt::Write;

use crate::ui::form::LoginForm;
use crate::ui::state::UiState;

/// Text panel for the current form state.
pub fn render(form: &LoginForm) -> String {
    let mut out = String::new();
    match form.state() {
        UiState::Authenticated { user, message } => {
            let _ = writeln!(out, "== Hoş Geldiniz! ==");
            let _ = writeln!(out, "Kullanıcı ID: {}", user.user_id);
            let _ = writeln!(out, "Kullanıcı Adı: {}", user.username);
            let _ = writeln!(out, "[ok] {message}");
        }
        state => {
            let _ = writeln!(out, "== Kullanıcı Girişi ==");
            match state {
                UiState::Failed { message } => {
                    let _ = writeln!(out, "[hata] {message}");
                }
                UiState::Submitting => {
                    let _ = writeln!(out, "... {}", state.message().unwrap_or_default());
                }
                _ => {}
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::response::{LoginFailure, LoginSuccess};
    use crate::ui::state::AuthenticatedUser;

    #[test]
    fn idle_shows_login_header_only() {
        let text = render(&LoginForm::new());
        assert_eq!(text, "== Kullanıcı Girişi ==\n");
    }

    #[test]
    fn authenticated_shows_user() {
        let mut form = LoginForm::new();
        let sub = form.begin_submit();
        form.complete(
            sub.id,
            Ok(LoginSuccess {
                user: AuthenticatedUser {
                    user_id: 1,
                    username: "admin".into(),
                },
                message: "Giriş başarılı".into(),
            }),
        );
        let text = render(&form);
        assert!(text.contains("Kullanıcı ID: 1"));
        assert!(text.contains("Kullanıcı Adı: admin"));
    }

    #[test]
    fn failed_shows_error_without_user() {
        let mut form = LoginForm::new();
        let sub = form.begin_submit();
        form.complete(sub.id, Err(LoginFailure::Transport("refused".into())));
        let text = render(&form);
        assert!(text.contains("[hata] API sunucusuna bağlanılamıyor"));
        assert!(!text.contains("Kullanıcı ID"));
    }
}
