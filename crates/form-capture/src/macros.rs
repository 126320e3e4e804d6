/// Build a [`Path`](crate::Path) from an accessor expression.
///
/// Identifiers become field keys and `[expr]` becomes an index key. A
/// string literal is a field name that is not a valid identifier; an
/// integer literal after a dot (`items.0.qty`) is an index.
/// Renaming a field with an IDE rename keeps the expression in sync,
/// unlike a string path.
///
/// ```
/// use form_capture::{path, Key};
///
/// let p = path!(user.addresses[0].city);
/// assert_eq!(p.to_string(), "user.addresses[0].city");
///
/// let p = path!(user."first-name");
/// assert_eq!(p[1], Key::field("first-name"));
///
/// let i = 3;
/// assert_eq!(path!(rows[i]).to_string(), "rows[3]");
/// ```
#[macro_export]
macro_rules! path {
    (@munch $keys:ident;) => {};
    (@munch $keys:ident; . $($rest:tt)*) => {
        $crate::path!(@munch $keys; $($rest)*);
    };
    (@munch $keys:ident; [$index:expr] $($rest:tt)*) => {
        $keys.push($crate::Key::Index($index));
        $crate::path!(@munch $keys; $($rest)*);
    };
    (@munch $keys:ident; $field:ident $($rest:tt)*) => {
        $keys.push($crate::Key::Field(::std::string::String::from(stringify!($field))));
        $crate::path!(@munch $keys; $($rest)*);
    };
    (@munch $keys:ident; $key:literal $($rest:tt)*) => {
        $keys.push($crate::Key::from($key));
        $crate::path!(@munch $keys; $($rest)*);
    };
    () => {
        $crate::Path::root()
    };
    ($($expr:tt)+) => {{
        let mut keys = $crate::Path::root();
        $crate::path!(@munch keys; $($expr)+);
        keys
    }};
}
