/// Returns the hex code for a named Trello label color.
///
/// `"default"` maps to the neutral label color; unknown names return
/// `None`.
pub fn hex(name: &str) -> Option<&'static str> {
    let code = match name {
        "green" => "#70b500",
        "yellow" => "#f2d600",
        "orange" => "#ff9f1a",
        "red" => "#eb5a46",
        "purple" => "#c377e0",
        "blue" => "#0079bf",
        "sky" => "#00c2e0",
        "lime" => "#51e898",
        "pink" => "#ff78cb",
        "black" => "#4d4d4d",
        "default" => "#b6bbbf",
        _ => return None,
    };
    Some(code)
}
