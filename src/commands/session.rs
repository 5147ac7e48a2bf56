//! login / logout / status

use library_admin::{forms::LoginForm, AdminApp, AppError, AppResult};

use super::print_json;

pub async fn login(app: &AdminApp, email: &str, password: &str, json: bool) -> AppResult<()> {
    let view = app
        .services
        .auth
        .sign_in(&LoginForm::new(email, password))
        .await?;
    if !view.is_authenticated {
        return Err(AppError::AuthRejected(
            "the API refused the new token".to_string(),
        ));
    }

    if json {
        print_json(&serde_json::json!({ "authenticated": view.is_authenticated }))
    } else {
        println!("Signed in as {}", email);
        Ok(())
    }
}

pub fn logout(app: &AdminApp) -> AppResult<()> {
    app.services.auth.sign_out()?;
    println!("Signed out");
    Ok(())
}

pub async fn status(app: &AdminApp, json: bool) -> AppResult<()> {
    let view = app.services.auth.restore().await?;
    if json {
        return print_json(&serde_json::json!({
            "authenticated": view.is_authenticated,
            "loading": view.loading,
        }));
    }

    if view.is_authenticated {
        println!("Session valid");
    } else {
        println!("Not signed in");
    }
    Ok(())
}

/// Restore the stored session before any protected command.
pub async fn require(app: &AdminApp) -> AppResult<()> {
    let view = app.services.auth.restore().await?;
    if view.is_authenticated {
        Ok(())
    } else {
        Err(AppError::AuthRejected("not signed in".to_string()))
    }
}
