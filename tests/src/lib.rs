#[cfg(test)]
mod helpers {
    pub mod mock_messages {
        pub mod reveal_minter_mock_messages;
    }
    pub mod setup;
    pub mod utils;
}

#[cfg(test)]
mod tests {
    mod reveal_minter {
        mod admin_configurations;
        mod collection_creation;
        mod exchange;
        mod inventory;
        mod private_minting;
        mod public_minting;
        mod whitelist_stages;
    }
    mod scenarios {
        mod scenario_1;
        mod scenario_2;
    }
}
