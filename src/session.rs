use crate::{Error, Res, service::CatalogService, types::Credentials, warning};

/// Authenticated handle to the remote catalog service.
///
/// Created once at startup and passed by reference to every component that
/// talks to the service. The device identity is the first device the account
/// has registered; stream URLs are requested on its behalf.
pub struct Session<S> {
    service: S,
    device_id: String,
}

impl<S: CatalogService> Session<S> {
    /// Logs in and records the device identity.
    ///
    /// A rejected login or an account without registered devices is an
    /// [`Error::Auth`]. No retry is attempted.
    pub async fn authenticate(mut service: S, credentials: &Credentials) -> Res<Self> {
        let logged_in = service
            .login(
                &credentials.email,
                &credentials.password,
                &credentials.device_id,
            )
            .await
            .map_err(|e| Error::Auth(format!("Login failed: {}", e)))?;

        if !logged_in {
            return Err(Error::Auth(format!(
                "Login rejected for {}",
                credentials.email
            )));
        }

        let devices = service
            .registered_devices()
            .await
            .map_err(|e| Error::Auth(format!("Cannot list registered devices: {}", e)))?;

        let device_id = match devices.into_iter().next() {
            Some(device) => device.id,
            None => {
                return Err(Error::Auth(
                    "No registered device found for this account".to_string(),
                ));
            }
        };

        Ok(Self { service, device_id })
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Releases the server-side session. Failures are only reported.
    pub async fn close(mut self) {
        if let Err(e) = self.service.logout().await {
            warning!("Logout failed: {}", e);
        }
    }
}
