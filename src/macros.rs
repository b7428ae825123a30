// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literal, const or var
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! url {
    // Base + path pieces. Trailing '/' on the base is dropped so
    // `url!("https://host/", "/api")` doesn't double up.
    ($base:expr $(, $part:expr)+ $(,)?) => {{
        let mut u = ::std::string::String::from(($base).trim_end_matches('/'));
        $(
            u.push_str(&($part).to_string());
        )+
        u
    }};
}
