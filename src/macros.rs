/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing ring macros. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a closed [`Ring`](crate::geom::Ring) from a list of (x, y) tuples.
///
/// The closing vertex is appended automatically (the first vertex is repeated
/// at the end), so the tuples list each corner exactly once.
///
/// # Examples
///
/// ```
/// # use fuzzy_overlay::ring;
/// # use fuzzy_overlay::geom::Ring;
/// let ring = ring![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
/// assert!(ring.is_closed(1e-8));
/// assert_eq!(ring.vertex_count(), 4);
/// ```
#[macro_export]
macro_rules! ring {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut r = $crate::geom::Ring::with_capacity(size + 1);
            $(
                r.add_xy($x.0, $x.1);
            )*
            r.close();
            r
        }
    };
}

/// Construct an open [`Ring`](crate::geom::Ring) (a polyline path) from a list
/// of (x, y) tuples. Used mostly for cutter curves.
///
/// # Examples
///
/// ```
/// # use fuzzy_overlay::open_ring;
/// # use fuzzy_overlay::geom::Ring;
/// let path = open_ring![(0.0, 0.0), (2.0, 2.0), (4.0, 0.0)];
/// assert!(!path.is_closed(1e-8));
/// assert_eq!(path.segment_count(), 2);
/// ```
#[macro_export]
macro_rules! open_ring {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut r = $crate::geom::Ring::with_capacity(size);
            $(
                r.add_xy($x.0, $x.1);
            )*
            r
        }
    };
}
