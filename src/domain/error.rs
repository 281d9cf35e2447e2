use thiserror::Error;

/// Failures surfaced by the prompt responder.
///
/// `Display` renders the fixed Portuguese user-facing message for each
/// variant; these two strings are the externally observable contract and
/// what a presentation layer shows by default. The underlying cause of a
/// generation failure is carried in `detail` for logging only.
#[derive(Debug, Error)]
pub enum ResponderError {
    /// The chat client could not be constructed at startup (e.g. missing
    /// credential). Every call fails identically; the client is never
    /// rebuilt within the process.
    #[error("Erro ao inicializar o cliente de IA. Por favor, tente novamente mais tarde.")]
    ClientUnavailable,

    /// Any failure while submitting the prompt or parsing the response:
    /// network error, timeout, non-2xx status, malformed body.
    #[error("Desculpe, ocorreu um erro ao gerar a resposta. Por favor, tente novamente.")]
    Generation { detail: String },
}

impl ResponderError {
    pub fn generation(detail: impl Into<String>) -> Self {
        Self::Generation {
            detail: detail.into(),
        }
    }

    pub fn is_client_unavailable(&self) -> bool {
        matches!(self, Self::ClientUnavailable)
    }

    pub fn is_generation(&self) -> bool {
        matches!(self, Self::Generation { .. })
    }

    /// Diagnostic detail for logs; `None` for the unavailable sentinel.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::ClientUnavailable => None,
            Self::Generation { detail } => Some(detail),
        }
    }
}
