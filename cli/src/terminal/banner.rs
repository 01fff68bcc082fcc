use colored::*;

const BANNER_0: &str = r#"
        ██████╗██╗██████╗  ██████╗
       ██╔════╝██║██╔══██╗██╔════╝
       ██║     ██║██████╔╝██║
       ██║     ██║██╔══██╗██║
       ╚██████╗██║██║  ██║╚██████╗
        ╚═════╝╚═╝╚═╝  ╚═╝ ╚═════╝
"#;

const BANNER_1: &str = r#"
             _
        ___ (_) _ __  ___
       / __|| || '__|/ __|
      | (__ | || |  | (__
       \___||_||_|   \___|
"#;

const BANNER_2: &str = r#"
       .--.--.--.--.--.--.--.
       |  ||  ||  ||  ||  ||  |   the circulation desk
       |  ||  ||  ||  ||  ||  |
       |__||__||__||__||__||__|
      ==========================
"#;

pub fn print() {
    let n: u8 = rand::random_range(0..=2);
    match n {
        0 => super::print::print(&format!("{}", BANNER_0.bright_green())),
        1 => super::print::print(&format!("{}", BANNER_1.truecolor(255, 165, 0))),
        _ => super::print::print(&format!("{}", BANNER_2.bright_cyan())),
    }
}
