use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("Math error - overflow")]
    Overflow,
    #[error("Math error - underflow")]
    Underflow,
    #[error("Math error - division by zero")]
    DivisionByZero,
    #[error("BitMath error - zero input value")]
    ZeroValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Domain error - price must be positive")]
    NonPositivePrice,
    #[error("Domain error - price range bounds are equal")]
    DegenerateRange,
    #[error("Domain error - sqrtPrice is 0")]
    ZeroSqrtPrice,
    #[error("Domain error - liquidity is 0")]
    ZeroLiquidity,
    #[error("Domain error - bit index outside [0, 256)")]
    BitIndexOutOfRange,

    #[error("Domain error - tick out of bounds")]
    TickOutOfBounds,
    #[error("Domain error - sqrtPrice out of bounds")]
    SqrtPriceOutOfBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Domain(#[from] crate::error::DomainError),

    #[error(transparent)]
    Arithmetic(#[from] crate::error::ArithmeticError),
}
