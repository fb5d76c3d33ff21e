use crate as pallet_oik_token;
use frame_support::{
    derive_impl,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

pub const OWNER: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;

pub const MAX_SUPPLY: u128 = 1_000_000_000;
pub const DECIMALS: u8 = 6;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        OikToken: pallet_oik_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
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
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_oik_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

/// Genesis parameters for a test chain. Defaults mirror the OIK deployment:
/// owner `1`, max supply 1e9, 6 decimals, nothing minted.
pub struct ExtBuilder {
    owner: Option<u64>,
    max_supply: u128,
    initial_balances: Vec<(u64, u128)>,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        Self { owner: Some(OWNER), max_supply: MAX_SUPPLY, initial_balances: vec![] }
    }
}

impl ExtBuilder {
    pub fn owner(mut self, owner: Option<u64>) -> Self {
        self.owner = owner;
        self
    }

    pub fn max_supply(mut self, max_supply: u128) -> Self {
        self.max_supply = max_supply;
        self
    }

    pub fn balances(mut self, balances: Vec<(u64, u128)>) -> Self {
        self.initial_balances = balances;
        self
    }

    pub fn build(self) -> sp_io::TestExternalities {
        let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

        pallet_oik_token::GenesisConfig::<Test> {
            owner: self.owner,
            token_name: b"OIK".to_vec(),
            token_symbol: b"OIK".to_vec(),
            decimals: DECIMALS,
            max_supply: self.max_supply,
            initial_balances: self.initial_balances,
        }
        .assimilate_storage(&mut t)
        .unwrap();

        let mut ext = sp_io::TestExternalities::new(t);
        ext.execute_with(|| System::set_block_number(1));
        ext
    }
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    ExtBuilder::default().build()
}
