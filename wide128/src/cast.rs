/// A trait for conversions with native-cast semantics.
///
/// Narrowing conversions truncate as the `as` operator would: high-order
/// bits beyond the target width are discarded, and conversions to signed
/// targets reinterpret the retained bits as two's complement.
pub trait CastFrom<Input> {
    fn cast_from(input: Input) -> Self;
}

/// The consuming counterpart of [`CastFrom`], blanket-implemented for every
/// pair of types with a `CastFrom` impl.
pub trait CastInto<Output> {
    fn cast_into(self) -> Output;
}

impl<Input, Output> CastInto<Output> for Input
where
    Output: CastFrom<Input>,
{
    fn cast_into(self) -> Output {
        Output::cast_from(self)
    }
}
