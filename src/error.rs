use serde::Serialize;
use thiserror::Error;

use crate::target::ShareTarget;

pub type Result<T> = std::result::Result<T, Error>;

// This enum defines the errors that can be sent back to the frontend.
// Every variant is terminal for the operation that produced it, and
// `serde::Serialize` turns it into the single message string the frontend receives.
#[derive(Debug, Error)]
pub enum Error {
    #[error("No hay contenido para compartir")]
    NoContent,
    #[error("App no soportada: {0}")]
    UnsupportedTarget(String),
    #[error("{0} no esta instalada o no se pudo abrir")]
    AppUnavailable(ShareTarget),
    #[error("No se pudo capturar la pantalla")]
    CaptureFailed,
    #[error("No hay una vista disponible para capturar la pantalla")]
    CaptureUnavailable,
    #[error("Base64 invalido o no es una imagen")]
    InvalidImage,
    #[error("Permiso de galeria denegado")]
    PermissionDenied,
    #[error("Error guardando imagen: {0}")]
    StorageWriteFailed(String),
    #[error("{0}")]
    Underlying(String),
    #[error(transparent)]
    Tauri(#[from] tauri::Error),
    #[cfg(mobile)]
    #[error(transparent)]
    PluginInvoke(#[from] tauri::plugin::mobile::PluginInvokeError),
}

/// The category of an [`Error`], independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    NoContent,
    UnsupportedTarget,
    AppUnavailable,
    CaptureFailed,
    CaptureUnavailable,
    InvalidImage,
    PermissionDenied,
    StorageWriteFailed,
    Underlying,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoContent => ErrorKind::NoContent,
            Error::UnsupportedTarget(_) => ErrorKind::UnsupportedTarget,
            Error::AppUnavailable(_) => ErrorKind::AppUnavailable,
            Error::CaptureFailed => ErrorKind::CaptureFailed,
            Error::CaptureUnavailable => ErrorKind::CaptureUnavailable,
            Error::InvalidImage => ErrorKind::InvalidImage,
            Error::PermissionDenied => ErrorKind::PermissionDenied,
            Error::StorageWriteFailed(_) => ErrorKind::StorageWriteFailed,
            Error::Underlying(_) | Error::Tauri(_) => ErrorKind::Underlying,
            #[cfg(mobile)]
            Error::PluginInvoke(_) => ErrorKind::Underlying,
        }
    }
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_unavailable_names_the_app() {
        let err = Error::AppUnavailable(ShareTarget::Whatsapp);
        assert_eq!(err.to_string(), "whatsapp no esta instalada o no se pudo abrir");
        assert_eq!(err.kind(), ErrorKind::AppUnavailable);
    }

    #[test]
    fn errors_serialize_as_their_message() {
        let json = serde_json::to_string(&Error::UnsupportedTarget("myspace".into())).unwrap();
        assert_eq!(json, "\"App no soportada: myspace\"");
    }

    #[test]
    fn permission_and_storage_failures_are_distinct() {
        assert_ne!(
            Error::PermissionDenied.kind(),
            Error::StorageWriteFailed("disk full".into()).kind()
        );
    }
}
