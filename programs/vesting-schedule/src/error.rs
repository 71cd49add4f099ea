use anchor_lang::prelude::*;

/// Custom error codes for the vesting schedule program.
#[error_code]
#[derive(PartialEq, Eq)]
pub enum VestingError {
    #[msg("Unauthorized: administrator signature required")]
    UnauthorizedAdmin,

    #[msg("Unauthorized: owner signature required")]
    UnauthorizedOwner,

    #[msg("Unauthorized: beneficiary signature required")]
    UnauthorizedBeneficiary,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Allocation name is too long")]
    NameTooLong,

    #[msg("Allocation ledger is full")]
    LedgerFull,

    #[msg("An allocation already exists for this beneficiary")]
    AllocationExists,

    #[msg("Allocation not found")]
    AllocationNotFound,

    #[msg("Allocation was deleted")]
    AllocationDeleted,

    #[msg("Release date must be after the earliest withdrawal date")]
    ReleaseBeforeEarliestWithdrawal,

    #[msg("New release date must be later than the current one")]
    ExtensionNotInFuture,

    #[msg("Total vested would exceed available funds")]
    FundingCapExceeded,

    #[msg("Requested amount exceeds drawing power")]
    ExceedsDrawingPower,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Funder token balance is insufficient")]
    InsufficientFunderBalance,

    #[msg("Administrator already registered")]
    AdministratorExists,

    #[msg("Administrator not found")]
    AdministratorNotFound,

    #[msg("Administrator set is full")]
    AdministratorSetFull,

    #[msg("The owner cannot be removed from the administrator set")]
    CannotRemoveOwner,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
