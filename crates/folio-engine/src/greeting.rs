/// Greeting phrase for an hour of day on the 24h clock.
pub fn time_greeting(hour: u32) -> &'static str {
    if hour < 5 {
        "Good night"
    } else if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Full greeting line, addressing the user by name when one is saved.
pub fn greeting_line(hour: u32, name: Option<&str>) -> String {
    let base = time_greeting(hour);
    match name {
        Some(name) if !name.is_empty() => format!("{}, {}!", base, name),
        _ => format!("{}!", base),
    }
}
