use sharkdeal_core::models::{Deal, StoreDirectory};

#[derive(Debug)]
pub enum Message {
    // Navigation
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    OpenSelectedDeal,

    // Menu
    ToggleMenu,
    MenuNext,
    MenuPrevious,
    MenuSelect,

    // Filtering
    StartFilter,
    CancelFilter,
    ConfirmFilter,
    FilterPush(char),
    FilterPop,
    ClearFilter,

    // Upper price popup
    OpenUpperPrice,
    UpperPricePush(char),
    UpperPricePop,
    UpperPriceApply,

    // Popups
    ClosePopup,

    // Data loading results
    RequestRefresh,
    DealsRefreshed {
        deals: Vec<Deal>,
        stores: StoreDirectory,
    },
    ThumbnailProbed {
        url: String,
        reachable: bool,
    },

    // System
    Tick,
    Quit,
}
