use fuzzytext_core::{generate, Locale};

fn main() {
    // 1) A handful of readings, one per minute band
    let samples = [
        (0, 0),
        (6, 5),
        (9, 15),
        (10, 20),
        (10, 30),
        (10, 35),
        (12, 0),
        (16, 45),
        (23, 50),
    ];

    // 2) Render them in every locale
    for &locale in Locale::all() {
        println!("--- {} ---", locale.tag());
        for (h, m) in samples {
            println!("{:02}:{:02} - {}", h, m, generate(locale, h, m));
        }
    }
}
