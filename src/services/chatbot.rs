// src/services/chatbot.rs

pub const GREETING_REPLY: &str = "¡Hola! Gracias por contactarme. ¿En qué puedo ayudarte?";
pub const PRICING_REPLY: &str = "Para información de precios, por favor contacta a un agente.";
pub const THANKS_REPLY: &str = "¡De nada! Estoy aquí para servirte.";
pub const FALLBACK_REPLY: &str = "He recibido tu mensaje. En breve te contactaré.";
pub const NO_MESSAGE_REPLY: &str = "No he recibido ningún mensaje.";

#[derive(Debug, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Pricing,
    Thanks,
    Unknown,
}

// Checked in order, first match wins: a message containing both "hola"
// and "precio" is a greeting.
pub fn detect_intent(msg: &str) -> Intent {
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("hola") {
        Intent::Greeting
    } else if msg_lower.contains("precio") {
        Intent::Pricing
    } else if msg_lower.contains("gracias") {
        Intent::Thanks
    } else {
        Intent::Unknown
    }
}

pub fn generate_reply(user_msg: &str) -> &'static str {
    use Intent::*;

    match detect_intent(user_msg) {
        Greeting => GREETING_REPLY,
        Pricing => PRICING_REPLY,
        Thanks => THANKS_REPLY,
        Unknown => FALLBACK_REPLY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_is_case_insensitive() {
        assert_eq!(detect_intent("HOLA"), Intent::Greeting);
        assert_eq!(detect_intent("Hola"), Intent::Greeting);
        assert_eq!(detect_intent("hola"), Intent::Greeting);
        assert_eq!(detect_intent("¿Cuál es el PRECIO?"), Intent::Pricing);
        assert_eq!(detect_intent("GrAcIaS"), Intent::Thanks);
    }

    #[test]
    fn greeting_wins_over_other_keywords() {
        assert_eq!(detect_intent("hola precio gracias"), Intent::Greeting);
        assert_eq!(detect_intent("precio gracias"), Intent::Pricing);
        assert_eq!(detect_intent("muchas gracias"), Intent::Thanks);
    }

    #[test]
    fn unknown_falls_through() {
        assert_eq!(detect_intent("Quiero más información"), Intent::Unknown);
        assert_eq!(generate_reply("Quiero más información"), FALLBACK_REPLY);
    }
}
