//! Localized error messages
//!
//! Spanish is the primary language of the mobile apps and the default when
//! the client sends no usable `Accept-Language`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub use gc_shared::types::Language;

#[derive(Debug, Clone, Copy)]
pub struct Message {
    pub es: &'static str,
    pub en: &'static str,
}

static MESSAGES: Lazy<HashMap<&'static str, Message>> = Lazy::new(|| {
    let entries: [(&'static str, &'static str, &'static str); 21] = [
        // auth
        ("missing_google_token", "No se proporcionó el token de Google", "No google token provided"),
        ("missing_refresh_token", "No se proporcionó el token de actualización", "No refresh token provided"),
        ("missing_auth_token", "No se proporcionó el token de autenticación", "No auth token provided"),
        ("invalid_user", "Usuario inválido", "Invalid user"),
        ("provider_unavailable", "El servicio de Google no está disponible, intenta más tarde", "Identity provider unavailable, please try again later"),
        // token
        ("token_invalid", "Token inválido", "Invalid token"),
        ("token_expired", "El token ha expirado", "Token expired"),
        ("token_not_yet_valid", "El token aún no es válido", "Token not yet valid"),
        ("token_revoked", "El token fue revocado", "Token revoked"),
        // assignment
        ("user_not_found", "El usuario no existe", "The user does not exist"),
        ("user_already_assigned", "El usuario ya tiene una compañía asignada", "The user already has a company assigned"),
        ("company_not_found", "La companía no existe", "The company does not exist"),
        ("company_already_assigned", "La compañía ya tiene un usuario asignado", "The company already has a user assigned"),
        ("assignment_failed", "Error no esperado", "Unexpected error"),
        // complaints
        ("complaint_not_found", "Queja no encontrada.", "Complaint not found."),
        // validation
        ("validation_error", "Datos inválidos: {message}", "Invalid data: {message}"),
        ("required_field", "Campo requerido: {field}", "Required field: {field}"),
        ("out_of_range", "{field} fuera de rango (mín: {min}, máx: {max})", "{field} out of range (min: {min}, max: {max})"),
        // general
        ("not_found", "Recurso no encontrado: {resource}", "Resource not found: {resource}"),
        ("unauthorized", "Acceso no autorizado", "Unauthorized access"),
        ("internal_error", "Ocurrió un error interno", "An internal error occurred"),
    ];

    entries
        .into_iter()
        .map(|(key, es, en)| (key, Message { es, en }))
        .collect()
});

/// Message for `key` in `lang`, with `{name}` placeholders substituted
///
/// Unknown keys come back as the key itself so a missing entry is visible in
/// responses instead of producing an empty message.
pub fn translate(key: &str, lang: Language, params: &[(&str, &str)]) -> String {
    let template = match MESSAGES.get(key) {
        Some(message) => match lang {
            Language::Spanish => message.es,
            Language::English => message.en,
        },
        None => return key.to_string(),
    };
    format_message(template, params)
}

pub fn format_message(template: &str, params: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (name, value) in params {
        result = result.replace(&format!("{{{}}}", name), value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_defaults_to_spanish_literals() {
        assert_eq!(
            translate("user_already_assigned", Language::default(), &[]),
            "El usuario ya tiene una compañía asignada"
        );
        assert_eq!(translate("token_invalid", Language::English, &[]), "Invalid token");
    }

    #[test]
    fn test_translate_fills_placeholders() {
        let message = translate(
            "out_of_range",
            Language::English,
            &[("field", "rating"), ("min", "1"), ("max", "5")],
        );
        assert_eq!(message, "rating out of range (min: 1, max: 5)");
    }

    #[test]
    fn test_unknown_key_is_echoed() {
        assert_eq!(translate("no_such_key", Language::Spanish, &[]), "no_such_key");
    }
}
