
use serde::Serialize;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Serialize, strum_macros::AsRefStr)]
#[serde(tag = "type", content = "data")]
pub enum Error {
    // -- Session
    LoginFail,
    NotLoggedIn,
    AccessDenied { page: String },
    WrongCurrentPassword,
    PasswordsDoNotMatch,

    // -- Input
    MissingField { field: &'static str },
    InvalidQuantity { value: String },
    InvalidAmount { value: String },
    InvalidDate { value: String },
    DateRangeInverted { from: String, to: String },
    UnknownChoice { kind: &'static str, value: String },
    UnknownBranch { name: String },
    BranchNotOperating { name: String },

    // -- Records
    EntityNotFound { entity: &'static str, id: String },
    OrderNotPending { id: String },

    // -- Shell
    Parse { line: usize, message: String },
    Script { line: usize, cause: Box<Error> },

    // -- Ambient
    ConfigInvalidEnv(&'static str),
    Io(String),
    Json(String),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

impl Error {
    /// Title of the dialog the panel shows for this failure.
    pub fn client_title(&self) -> &'static str {
        match self {
            Self::NotLoggedIn | Self::AccessDenied { .. } => "Acceso Denegado",
            _ => "Error",
        }
    }

    /// Text the panel shows the user. `Display` stays the debug form for logs.
    pub fn client_message(&self) -> String {
        use Error::*;

        match self {
            LoginFail => "Usuario o contraseña de Gerente incorrectos.".to_string(),
            NotLoggedIn | AccessDenied { .. } => {
                "Debe iniciar sesión para acceder a esta vista.".to_string()
            }
            WrongCurrentPassword => "Contraseña actual incorrecta.".to_string(),
            PasswordsDoNotMatch => "Las nuevas contraseñas no coinciden.".to_string(),
            MissingField { field } => format!("Debe completar el campo '{field}'."),
            InvalidQuantity { .. } => {
                "Asegúrese de ingresar un artículo y una cantidad válida.".to_string()
            }
            InvalidAmount { value } => format!("El monto '{value}' no es válido."),
            InvalidDate { value } => format!("La fecha '{value}' no es válida (AAAA-MM-DD)."),
            DateRangeInverted { from, to } => {
                format!("El rango {from} - {to} es inválido: la fecha inicial es posterior.")
            }
            UnknownChoice { kind, value } => format!("'{value}' no es un valor válido para {kind}."),
            UnknownBranch { name } => format!("La sucursal '{name}' no existe."),
            BranchNotOperating { name } => format!("La sucursal '{name}' no está operando."),
            EntityNotFound { entity, id } => format!("No existe {entity} con ID {id}."),
            OrderNotPending { .. } => {
                "Solo se pueden cancelar pedidos en estado 'Pendiente'.".to_string()
            }
            Parse { line, message } => format!("Línea {line}: {message}"),
            Script { line, cause } => format!("Línea {line}: {}", cause.client_message()),
            ConfigInvalidEnv(name) => format!("Variable de entorno inválida: {name}"),
            Io(cause) => format!("Error de E/S: {cause}"),
            Json(cause) => format!("Error de serialización: {cause}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn variant_names_and_messages() {
        let err = Error::EntityNotFound { entity: "empleado", id: "999".to_string() };
        assert_eq!(err.as_ref(), "EntityNotFound");
        assert_eq!(err.client_title(), "Error");
        assert_eq!(err.client_message(), "No existe empleado con ID 999.");

        let denied = Error::AccessDenied { page: "Perfil".to_string() };
        assert_eq!(denied.client_title(), "Acceso Denegado");
    }

    #[test]
    fn serializes_tagged() {
        let json = serde_json::to_value(Error::OrderNotPending { id: "P002".to_string() }).unwrap();
        assert_eq!(json["type"], "OrderNotPending");
        assert_eq!(json["data"]["id"], "P002");
    }
}
