/// Builds a [`VectorQuery`](crate::stmt::VectorQuery) from lookups.
///
/// String literals become terms with the default weight. `lookup = W` pairs
/// become terms weighted `W`, where `W` is one of `A`, `B`, `C` or `D`.
/// Relations are traversed with the double-underscore separator.
///
/// ```
/// use vectorfield_core::vq;
///
/// let content = vq!("name", description = B, category__label = A);
/// assert_eq!(content.len(), 3);
/// assert_eq!(content.to_string(), "(||: name:D, description:B, category__label:A)");
/// ```
#[macro_export]
macro_rules! vq {
    ( $($args:tt)* ) => {
        $crate::stmt::VectorQuery::from_vectors($crate::__vq_vectors!([] $($args)*))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __vq_vectors {
    ( [ $($out:expr,)* ] ) => {
        ::std::vec![ $($out,)* ]
    };
    ( [ $($out:expr,)* ] $lookup:ident = $weight:ident $(, $($rest:tt)*)? ) => {
        $crate::__vq_vectors!(
            [
                $($out,)*
                $crate::stmt::Vector::with_weight(
                    ::core::stringify!($lookup),
                    $crate::stmt::Weight::$weight,
                ),
            ]
            $($($rest)*)?
        )
    };
    ( [ $($out:expr,)* ] $lookup:literal $(, $($rest:tt)*)? ) => {
        $crate::__vq_vectors!(
            [ $($out,)* $crate::stmt::Vector::new($lookup), ]
            $($($rest)*)?
        )
    };
}
