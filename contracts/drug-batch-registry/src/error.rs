use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    // Authorization errors
    Unauthorized = 100,

    // Field validation errors
    InvalidIdentifier = 101,
    InvalidQuantity = 102,
    InvalidDate = 103,
    InvalidHash = 104,

    // Registration errors
    UnauthorizedManufacturer = 105,
    DuplicateIdentifier = 106,
    NotFound = 107,

    InvalidMetadata = 108,
    AuthorityNotBound = 109,
    InvalidStatus = 110,
    InvalidLocation = 111,
    InvalidTemperature = 112,
    CapacityExceeded = 113,

    // Authority binding errors
    AlreadyBound = 115,
    InvalidIdentity = 116,

    // Fee collaborator
    TransferFailed = 117,

    // Lifecycle errors
    AlreadyInitialized = 118,
    NotInitialized = 119,
}
