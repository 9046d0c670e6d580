pub fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut len = out.len();
    for v in values {
        if out.len() > len {
            out.push_str(separator);
        }
        len = out.len();
        f(out, v);
    }
}

#[macro_export]
macro_rules! truncate_long {
    ($text:expr) => {
        format_args!(
            "{}{}",
            &$text[..::std::cmp::min($text.len(), 497)].trim_end(),
            if $text.len() > 497 { "..." } else { "" },
        )
    };
}
