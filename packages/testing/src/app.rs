use std::ops::{Deref, DerefMut};

use cosmwasm_std::{
    testing::{MockApi, MockStorage},
    Empty,
};
use cw_multi_test::{
    App, AppBuilder, BankKeeper, DistributionKeeper, FailingModule, GovFailingModule,
    IbcFailingModule, StakeKeeper, WasmKeeper,
};

use crate::stargate::StargateKeeper;

pub type OmniflixInnerApp = App<
    BankKeeper,
    MockApi,
    MockStorage,
    FailingModule<Empty, Empty, Empty>,
    WasmKeeper<Empty, Empty>,
    StakeKeeper,
    DistributionKeeper,
    IbcFailingModule,
    GovFailingModule,
    StargateKeeper,
>;

/// Multi-test app whose stargate router emulates the onft module.
pub struct OmniflixApp(OmniflixInnerApp);

impl OmniflixApp {
    pub fn new() -> Self {
        let app = AppBuilder::new()
            .with_stargate(StargateKeeper {})
            .build(|_, _, _| {});
        OmniflixApp(app)
    }
}

impl Default for OmniflixApp {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for OmniflixApp {
    type Target = OmniflixInnerApp;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for OmniflixApp {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
