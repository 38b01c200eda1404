use crate as pallet_lue_token;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        LueToken: pallet_lue_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

parameter_types! {
    pub const MaxBatchSize: u32 = 16;
}

impl pallet_lue_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Balance = u128;
    type MaxBatchSize = MaxBatchSize;
    type WeightInfo = ();
}

/// The all-zero account.
pub const NULL: u64 = 0;
pub const OWNER: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const CHARLIE: u64 = 4;

pub const INITIAL_SUPPLY: u128 = 10_000;
pub const MAX_SUPPLY: u128 = 100_000_000;

/// Genesis matching the standard deployment: 10_000 "Lue" with no decimals,
/// capped at 100_000_000, owned by `OWNER`.
pub fn default_genesis() -> pallet_lue_token::GenesisConfig<Test> {
    pallet_lue_token::GenesisConfig::<Test> {
        name: b"LueLueLueERC20Token".to_vec(),
        symbol: b"Lue".to_vec(),
        initial_supply: INITIAL_SUPPLY,
        decimals: 0,
        max_supply: MAX_SUPPLY,
        initial_owner: Some(OWNER),
    }
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    new_test_ext_with(default_genesis())
}

pub fn new_test_ext_with(
    genesis: pallet_lue_token::GenesisConfig<Test>,
) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    genesis.assimilate_storage(&mut t).unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are not recorded in block 0.
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Asserts the ledger invariants hold.
pub fn assert_invariants() {
    assert_eq!(LueToken::do_try_state(), Ok(()));
}
