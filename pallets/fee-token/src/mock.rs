use crate as pallet_fee_token;
use frame_support::{derive_impl, traits::ConstU64};
use sp_runtime::{traits::IdentityLookup, BuildStorage};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        FeeToken: pallet_fee_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type BlockHashCount = ConstU64<250>;
}

impl pallet_fee_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

/// Deploying account, holds the mint authority.
pub const OWNER: u64 = 1;
pub const FEE_MANAGER: u64 = 2;
pub const TREASURY: u64 = 3;
/// Receives the genesis mint.
pub const MINT_TO: u64 = 4;
pub const ALICE: u64 = 10;
pub const BOB: u64 = 11;

pub const INITIAL_MINT: u128 = 80_000;
/// 1%
pub const FEE_BP: u16 = 100;

pub struct ExtBuilder {
    fee_basis_points: u16,
    fee_treasury: Option<u64>,
    initial_mint_amount: u128,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        Self { fee_basis_points: FEE_BP, fee_treasury: Some(TREASURY), initial_mint_amount: INITIAL_MINT }
    }
}

impl ExtBuilder {
    pub fn fee_basis_points(mut self, fee_basis_points: u16) -> Self {
        self.fee_basis_points = fee_basis_points;
        self
    }

    pub fn without_treasury(mut self) -> Self {
        self.fee_treasury = None;
        self
    }

    pub fn initial_mint_amount(mut self, amount: u128) -> Self {
        self.initial_mint_amount = amount;
        self
    }

    pub fn genesis(&self) -> pallet_fee_token::GenesisConfig<Test> {
        pallet_fee_token::GenesisConfig::<Test> {
            name: b"TestToken".to_vec(),
            symbol: b"TST".to_vec(),
            decimals: 18,
            owner: Some(OWNER),
            fee_manager: Some(FEE_MANAGER),
            fee_treasury: self.fee_treasury,
            fee_basis_points: self.fee_basis_points,
            initial_mint_amount: self.initial_mint_amount,
            initial_mint_recipient: Some(MINT_TO),
        }
    }

    pub fn build(self) -> sp_io::TestExternalities {
        let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
        self.genesis().assimilate_storage(&mut t).unwrap();

        // Events are only recorded from block 1 onwards.
        let mut ext = sp_io::TestExternalities::new(t);
        ext.execute_with(|| System::set_block_number(1));
        ext
    }
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    ExtBuilder::default().build()
}
