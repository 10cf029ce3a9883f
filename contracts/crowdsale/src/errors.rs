use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    SaleNotOpen = 4,
    SaleNotClosed = 5,
    AlreadyFinalized = 6,
    ContributionOutOfBounds = 7,
    CapExceeded = 8,
    IncorrectPayment = 9,
    InvalidPrice = 10,
    InvalidParams = 11,
}
