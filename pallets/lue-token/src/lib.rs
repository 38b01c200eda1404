//! # Lue Token Pallet
//!
//! A fungible token ledger with a hard supply ceiling, a set of authorized
//! minters, an owner-controlled emergency pause and a recipient blacklist.
//!
//! - Balance-mutating calls (`transfer`, `mint`, `burn`, the batch variants and
//!   the allowance-based `transfer_from` / `burn_from`) are rejected while the
//!   ledger is paused.
//! - Owner-only calls (minter, pause, blacklist and ownership management) stay
//!   available while paused.
//! - Blacklisted accounts cannot receive tokens but may still send and burn.
//! - All arithmetic is checked. Every dispatchable runs in its own storage
//!   layer, so a failing call (including a batch failing half way) leaves
//!   storage untouched.
//!
//! The sum of all balances always equals `TotalSupply`, and `TotalSupply`
//! never exceeds `MaxSupply`. See [`Pallet::do_try_state`].

#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` and `Config::RuntimeEvent` are deprecated upstream but still supported
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{
    dispatch::DispatchResult, ensure, pallet_prelude::*, storage::with_storage_layer,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::{AtLeast32BitUnsigned, Bounded, CheckedAdd, CheckedSub, Saturating, Zero};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "runtime::lue-token";

/// Name used when the genesis config leaves it empty.
pub const DEFAULT_TOKEN_NAME: &[u8] = b"LueLueLueERC20Token";
/// Symbol used when the genesis config leaves it empty.
pub const DEFAULT_TOKEN_SYMBOL: &[u8] = b"Lue";
/// Initial supply used when the genesis config sets it to zero.
pub const DEFAULT_INITIAL_SUPPLY: u32 = 10_000;

/// Maximum token name length in bytes.
pub type NameLimit = ConstU32<64>;
/// Maximum token symbol length in bytes.
pub type SymbolLimit = ConstU32<16>;

/// Static token description, as returned by [`Pallet::token_info`].
#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct TokenInfo<Balance> {
    pub name: Vec<u8>,
    pub symbol: Vec<u8>,
    pub total_supply: Balance,
    pub max_supply: Balance,
    pub initial_supply: Balance,
    pub decimals: u8,
}

/// Supply and control snapshot seen by a given caller, as returned by [`Pallet::stats`].
#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct TokenStats<AccountId, Balance> {
    pub current_supply: Balance,
    pub max_supply: Balance,
    pub remaining_mintable: Balance,
    pub is_paused: bool,
    pub owner: Option<AccountId>,
    pub caller_balance: Balance,
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Balance and supply type. A zero `max_supply` at genesis is stored as
        /// `Balance::max_value()`.
        type Balance: Member
            + Parameter
            + AtLeast32BitUnsigned
            + Default
            + Copy
            + MaybeSerializeDeserialize
            + MaxEncodedLen;

        /// Maximum number of entries accepted by `batch_transfer` and `batch_mint`.
        #[pallet::constant]
        type MaxBatchSize: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "LueLueLueERC20Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, NameLimit>, ValueQuery>;

    /// Token symbol (e.g., "Lue")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, SymbolLimit>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T: Config> = StorageValue<_, T::Balance, ValueQuery>;

    /// Supply ceiling checked before every mint.
    #[pallet::storage]
    #[pallet::getter(fn max_supply)]
    pub type MaxSupply<T: Config> = StorageValue<_, T::Balance, ValueQuery>;

    /// Amount minted to the initial owner at genesis.
    #[pallet::storage]
    #[pallet::getter(fn initial_supply)]
    pub type InitialSupply<T: Config> = StorageValue<_, T::Balance, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, T::Balance, ValueQuery>;

    /// Spending allowances, keyed by (holder, spender).
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        T::Balance,
        ValueQuery,
    >;

    /// Account allowed to run administrative calls
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Accounts allowed to mint. Independent of `Owner`.
    #[pallet::storage]
    #[pallet::getter(fn is_minter)]
    pub type Minters<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Accounts that cannot receive tokens
    #[pallet::storage]
    #[pallet::getter(fn is_blacklisted)]
    pub type Blacklist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: T::Balance },
        /// New tokens minted
        TokensMinted { to: T::AccountId, amount: T::Balance },
        /// Tokens destroyed, reducing total supply
        Burned { from: T::AccountId, amount: T::Balance },
        /// Spending allowance set
        Approved { owner: T::AccountId, spender: T::AccountId, amount: T::Balance },
        MinterAdded { account: T::AccountId },
        MinterRemoved { account: T::AccountId },
        /// Balance-mutating calls are now rejected
        Paused { account: T::AccountId },
        Unpaused { account: T::AccountId },
        AddressBlacklisted { account: T::AccountId },
        AddressRemovedFromBlacklist { account: T::AccountId },
        OwnershipTransferred { previous_owner: Option<T::AccountId>, new_owner: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the owner, or not a minter for `mint`.
        NotAuthorized,
        /// The null account was supplied where a real account is required.
        InvalidAddress,
        /// Tokens cannot be sent or minted to the null account.
        InvalidRecipient,
        /// The null account cannot be a minter.
        InvalidMinterAddress,
        AlreadyMinter,
        AlreadyBlacklisted,
        /// The recipient is blacklisted.
        BlacklistedRecipient,
        InsufficientBalance,
        InsufficientAllowance,
        /// Minting would push total supply above the ceiling.
        ExceedsMaxSupply,
        /// The ledger is paused.
        ContractPaused,
        /// `unpause` called while the ledger is active.
        NotPaused,
        /// Batch recipients and amounts differ in length.
        ArrayLengthMismatch,
        /// Batch has more than `MaxBatchSize` entries.
        BatchTooLarge,
        ArithmeticOverflow,
        NameTooLong,
        SymbolTooLong,
        /// The token already has an owner or a non-zero supply.
        AlreadyInitialized,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(T::MaxBatchSize::get() > 0, "MaxBatchSize must be non-zero");
        }

        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: T::Balance) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::do_transfer(&sender, &to, amount)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: T::Balance) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            ensure!(Minters::<T>::get(&caller), Error::<T>::NotAuthorized);
            Self::do_mint(&to, amount)
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: T::Balance) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::do_burn(&caller, amount)
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::add_minter())]
        pub fn add_minter(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(!Self::is_null_account(&account), Error::<T>::InvalidMinterAddress);
            ensure!(!Minters::<T>::get(&account), Error::<T>::AlreadyMinter);
            Minters::<T>::insert(&account, true);
            Self::deposit_event(Event::MinterAdded { account });
            Ok(())
        }

        /// Removing an account that is not a minter succeeds and still emits the event.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::remove_minter())]
        pub fn remove_minter(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Minters::<T>::remove(&account);
            Self::deposit_event(Event::MinterRemoved { account });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let account = Self::ensure_owner(origin)?;
            Self::ensure_not_paused()?;
            Paused::<T>::put(true);
            log::info!(target: LOG_TARGET, "Ledger paused by {account:?}");
            Self::deposit_event(Event::Paused { account });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let account = Self::ensure_owner(origin)?;
            ensure!(Paused::<T>::get(), Error::<T>::NotPaused);
            Paused::<T>::put(false);
            log::info!(target: LOG_TARGET, "Ledger unpaused by {account:?}");
            Self::deposit_event(Event::Unpaused { account });
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::add_to_blacklist())]
        pub fn add_to_blacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(!Self::is_null_account(&account), Error::<T>::InvalidAddress);
            ensure!(!Blacklist::<T>::get(&account), Error::<T>::AlreadyBlacklisted);
            Blacklist::<T>::insert(&account, true);
            Self::deposit_event(Event::AddressBlacklisted { account });
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::remove_from_blacklist())]
        pub fn remove_from_blacklist(
            origin: OriginFor<T>,
            account: T::AccountId,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(!Self::is_null_account(&account), Error::<T>::InvalidAddress);
            Blacklist::<T>::remove(&account);
            Self::deposit_event(Event::AddressRemovedFromBlacklist { account });
            Ok(())
        }

        /// Transfers `amounts[i]` from the caller to `recipients[i]` for every `i`.
        ///
        /// Either every transfer is applied or none is.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::batch_transfer(recipients.len().max(amounts.len()) as u32))]
        pub fn batch_transfer(
            origin: OriginFor<T>,
            recipients: Vec<T::AccountId>,
            amounts: Vec<T::Balance>,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_batch_shape(&recipients, &amounts)?;

            for (to, amount) in recipients.iter().zip(amounts.iter()) {
                Self::do_transfer(&sender, to, *amount)?;
            }

            log::debug!(
                target: LOG_TARGET,
                "Batch transfer of {} entries from {sender:?}",
                recipients.len()
            );
            Ok(())
        }

        /// Mints `amounts[i]` to `recipients[i]` for every `i`.
        ///
        /// Either every mint is applied or none is.
        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::batch_mint(recipients.len().max(amounts.len()) as u32))]
        pub fn batch_mint(
            origin: OriginFor<T>,
            recipients: Vec<T::AccountId>,
            amounts: Vec<T::Balance>,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            ensure!(Minters::<T>::get(&caller), Error::<T>::NotAuthorized);
            Self::ensure_batch_shape(&recipients, &amounts)?;

            for (to, amount) in recipients.iter().zip(amounts.iter()) {
                Self::do_mint(to, *amount)?;
            }

            log::debug!(
                target: LOG_TARGET,
                "Batch mint of {} entries by {caller:?}",
                recipients.len()
            );
            Ok(())
        }

        /// Sets the allowance of `spender` over the caller's tokens, replacing any
        /// previous value. An allowance of `Balance::max_value()` is never consumed.
        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: T::Balance,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            ensure!(!Self::is_null_account(&spender), Error::<T>::InvalidAddress);
            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approved { owner, spender, amount });
            Ok(())
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: T::Balance,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::spend_allowance(&from, &spender, amount)?;
            Self::do_transfer(&from, &to, amount)
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::burn_from())]
        pub fn burn_from(origin: OriginFor<T>, from: T::AccountId, amount: T::Balance) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::spend_allowance(&from, &spender, amount)?;
            Self::do_burn(&from, amount)
        }

        /// Hands the owner role to `new_owner`. Minter membership of either
        /// account is left as it is.
        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let previous_owner = Self::ensure_owner(origin)?;
            ensure!(!Self::is_null_account(&new_owner), Error::<T>::InvalidAddress);
            Owner::<T>::put(&new_owner);
            log::info!(
                target: LOG_TARGET,
                "Ownership transferred from {previous_owner:?} to {new_owner:?}"
            );
            Self::deposit_event(Event::OwnershipTransferred {
                previous_owner: Some(previous_owner),
                new_owner,
            });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Token name, `DEFAULT_TOKEN_NAME` when empty
        pub name: Vec<u8>,
        /// Token symbol, `DEFAULT_TOKEN_SYMBOL` when empty
        pub symbol: Vec<u8>,
        /// Amount minted to `initial_owner`, `DEFAULT_INITIAL_SUPPLY` when zero
        pub initial_supply: T::Balance,
        pub decimals: u8,
        /// Supply ceiling, unlimited when zero
        pub max_supply: T::Balance,
        /// Owner and first minter
        pub initial_owner: Option<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            Pallet::<T>::initialize_token(
                &self.name,
                &self.symbol,
                self.initial_supply,
                self.decimals,
                self.max_supply,
                self.initial_owner.as_ref(),
            )
            .unwrap_or_else(|e| panic!("Invalid lue-token genesis config: {e:?}"));
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Writes token metadata, the supply ceiling and the owner, then mints the
    /// initial supply to the owner.
    ///
    /// Empty `name` / `symbol` and a zero `initial_supply` fall back to the
    /// `DEFAULT_*` constants, a zero `max_supply` means no ceiling. Without an
    /// owner nothing is minted and `InitialSupply` stays zero. Fails with
    /// `AlreadyInitialized` once an owner is set or tokens exist. Runs in its
    /// own storage layer, so an error leaves storage untouched.
    pub fn initialize_token(
        name: &[u8],
        symbol: &[u8],
        initial_supply: T::Balance,
        decimals: u8,
        max_supply: T::Balance,
        initial_owner: Option<&T::AccountId>,
    ) -> DispatchResult {
        ensure!(
            Owner::<T>::get().is_none() && TotalSupply::<T>::get().is_zero(),
            Error::<T>::AlreadyInitialized
        );

        let name = if name.is_empty() { DEFAULT_TOKEN_NAME } else { name };
        let name: BoundedVec<u8, NameLimit> =
            name.to_vec().try_into().map_err(|_| Error::<T>::NameTooLong)?;

        let symbol = if symbol.is_empty() { DEFAULT_TOKEN_SYMBOL } else { symbol };
        let symbol: BoundedVec<u8, SymbolLimit> =
            symbol.to_vec().try_into().map_err(|_| Error::<T>::SymbolTooLong)?;

        let initial_supply = if initial_supply.is_zero() {
            T::Balance::from(DEFAULT_INITIAL_SUPPLY)
        } else {
            initial_supply
        };
        let max_supply = if max_supply.is_zero() { T::Balance::max_value() } else { max_supply };

        if let Some(owner) = initial_owner {
            ensure!(!Self::is_null_account(owner), Error::<T>::InvalidAddress);
            ensure!(!Blacklist::<T>::get(owner), Error::<T>::BlacklistedRecipient);
            ensure!(initial_supply <= max_supply, Error::<T>::ExceedsMaxSupply);
        }

        with_storage_layer(|| {
            TokenName::<T>::put(name);
            TokenSymbol::<T>::put(symbol);
            Decimals::<T>::put(decimals);
            MaxSupply::<T>::put(max_supply);

            if let Some(owner) = initial_owner {
                Owner::<T>::put(owner);
                Minters::<T>::insert(owner, true);
                Self::do_mint(owner, initial_supply)?;
                InitialSupply::<T>::put(initial_supply);
            }

            log::info!(
                target: LOG_TARGET,
                "Token initialized: owner {initial_owner:?}, minted {:?}, max supply {max_supply:?}",
                InitialSupply::<T>::get()
            );
            Ok(())
        })
    }

    /// Moves `amount` from `from` to `to`.
    ///
    /// Does not check the pause flag; callers do.
    pub fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: T::Balance) -> DispatchResult {
        ensure!(!Self::is_null_account(to), Error::<T>::InvalidRecipient);
        ensure!(!Blacklist::<T>::get(to), Error::<T>::BlacklistedRecipient);

        let from_balance = Balances::<T>::get(from);
        let new_from_balance =
            from_balance.checked_sub(&amount).ok_or(Error::<T>::InsufficientBalance)?;

        if from != to {
            let new_to_balance = Balances::<T>::get(to)
                .checked_add(&amount)
                .ok_or(Error::<T>::ArithmeticOverflow)?;
            Self::set_balance(from, new_from_balance);
            Self::set_balance(to, new_to_balance);
        }

        Self::deposit_event(Event::Transferred { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    /// Credits `amount` to `to` and raises total supply, respecting the ceiling.
    ///
    /// Does not check the pause flag or minter membership; callers do.
    pub fn do_mint(to: &T::AccountId, amount: T::Balance) -> DispatchResult {
        ensure!(!Self::is_null_account(to), Error::<T>::InvalidRecipient);
        ensure!(!Blacklist::<T>::get(to), Error::<T>::BlacklistedRecipient);

        let new_supply = TotalSupply::<T>::get()
            .checked_add(&amount)
            .ok_or(Error::<T>::ArithmeticOverflow)?;
        ensure!(new_supply <= MaxSupply::<T>::get(), Error::<T>::ExceedsMaxSupply);

        let new_balance = Balances::<T>::get(to)
            .checked_add(&amount)
            .ok_or(Error::<T>::ArithmeticOverflow)?;

        TotalSupply::<T>::put(new_supply);
        Self::set_balance(to, new_balance);
        Self::deposit_event(Event::TokensMinted { to: to.clone(), amount });
        Ok(())
    }

    /// Destroys `amount` of `from`'s tokens.
    pub fn do_burn(from: &T::AccountId, amount: T::Balance) -> DispatchResult {
        let new_balance = Balances::<T>::get(from)
            .checked_sub(&amount)
            .ok_or(Error::<T>::InsufficientBalance)?;
        let new_supply = TotalSupply::<T>::get()
            .checked_sub(&amount)
            .ok_or(Error::<T>::ArithmeticOverflow)?;

        TotalSupply::<T>::put(new_supply);
        Self::set_balance(from, new_balance);
        Self::deposit_event(Event::Burned { from: from.clone(), amount });
        Ok(())
    }

    /// Static token description.
    pub fn token_info() -> TokenInfo<T::Balance> {
        TokenInfo {
            name: TokenName::<T>::get().into_inner(),
            symbol: TokenSymbol::<T>::get().into_inner(),
            total_supply: TotalSupply::<T>::get(),
            max_supply: MaxSupply::<T>::get(),
            initial_supply: InitialSupply::<T>::get(),
            decimals: Decimals::<T>::get(),
        }
    }

    /// Supply and control snapshot, including `caller`'s balance.
    pub fn stats(caller: &T::AccountId) -> TokenStats<T::AccountId, T::Balance> {
        TokenStats {
            current_supply: TotalSupply::<T>::get(),
            max_supply: MaxSupply::<T>::get(),
            remaining_mintable: Self::remaining_mintable_supply(),
            is_paused: Paused::<T>::get(),
            owner: Owner::<T>::get(),
            caller_balance: Balances::<T>::get(caller),
        }
    }

    /// How much can still be minted before hitting the ceiling.
    pub fn remaining_mintable_supply() -> T::Balance {
        MaxSupply::<T>::get().saturating_sub(TotalSupply::<T>::get())
    }

    /// Whether `who` encodes to all zero bytes, i.e. the null account.
    pub fn is_null_account(who: &T::AccountId) -> bool {
        who.using_encoded(|bytes| bytes.iter().all(|b| *b == 0))
    }

    /// Checks the ledger invariants:
    ///
    /// * the sum of all balances equals `TotalSupply`
    /// * `TotalSupply` does not exceed `MaxSupply`
    /// * a set owner is never the null account
    pub fn do_try_state() -> Result<(), DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(T::Balance::zero(), |acc, balance| acc.checked_add(&balance))
            .ok_or(DispatchError::Other("Sum of balances overflows"))?;
        ensure!(
            sum == TotalSupply::<T>::get(),
            DispatchError::Other("Sum of balances does not match total supply")
        );
        ensure!(
            TotalSupply::<T>::get() <= MaxSupply::<T>::get(),
            DispatchError::Other("Total supply exceeds max supply")
        );
        if let Some(owner) = Owner::<T>::get() {
            ensure!(
                !Self::is_null_account(&owner),
                DispatchError::Other("Owner is the null account")
            );
        }
        Ok(())
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::NotAuthorized);
        Ok(who)
    }

    fn ensure_not_paused() -> DispatchResult {
        ensure!(!Paused::<T>::get(), Error::<T>::ContractPaused);
        Ok(())
    }

    fn ensure_batch_shape(recipients: &[T::AccountId], amounts: &[T::Balance]) -> DispatchResult {
        ensure!(recipients.len() == amounts.len(), Error::<T>::ArrayLengthMismatch);
        ensure!(
            recipients.len() <= T::MaxBatchSize::get() as usize,
            Error::<T>::BatchTooLarge
        );
        Ok(())
    }

    /// Consumes `amount` of the allowance `owner` granted to `spender`.
    fn spend_allowance(
        owner: &T::AccountId,
        spender: &T::AccountId,
        amount: T::Balance,
    ) -> DispatchResult {
        let current = Allowances::<T>::get(owner, spender);
        if current == T::Balance::max_value() {
            return Ok(());
        }
        let remaining = current.checked_sub(&amount).ok_or(Error::<T>::InsufficientAllowance)?;
        Allowances::<T>::insert(owner, spender, remaining);
        Ok(())
    }

    // Zero balances are removed rather than stored.
    fn set_balance(who: &T::AccountId, amount: T::Balance) {
        if amount.is_zero() {
            Balances::<T>::remove(who);
        } else {
            Balances::<T>::insert(who, amount);
        }
    }
}
