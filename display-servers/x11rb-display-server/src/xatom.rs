use x11rb::{atom_manager, protocol::xproto};

atom_manager! {
    /// A collection of Atoms.
    pub AtomCollection:

    /// A handle to a response from the X11 server.
    AtomCollectionCookie {
        WMProtocols: b"WM_PROTOCOLS" as &[u8],
        WMDelete: b"WM_DELETE_WINDOW",
        WMState: b"WM_STATE",
        WMTakeFocus: b"WM_TAKE_FOCUS",
        WMNormalHints: b"WM_NORMAL_HINTS",
        NetActiveWindow: b"_NET_ACTIVE_WINDOW",
        NetCloseWindow: b"_NET_CLOSE_WINDOW",
        NetSupported: b"_NET_SUPPORTED",
        NetWMName: b"_NET_WM_NAME",

        NetWMWindowType: b"_NET_WM_WINDOW_TYPE",
        NetWMWindowTypeDesktop: b"_NET_WM_WINDOW_TYPE_DESKTOP",
        NetWMWindowTypeDock: b"_NET_WM_WINDOW_TYPE_DOCK",
        NetWMWindowTypeToolbar: b"_NET_WM_WINDOW_TYPE_TOOLBAR",
        NetWMWindowTypeMenu: b"_NET_WM_WINDOW_TYPE_MENU",
        NetWMWindowTypeUtility: b"_NET_WM_WINDOW_TYPE_UTILITY",
        NetWMWindowTypeSplash: b"_NET_WM_WINDOW_TYPE_SPLASH",
        NetWMWindowTypeDialog: b"_NET_WM_WINDOW_TYPE_DIALOG",
        NetSupportingWmCheck: b"_NET_SUPPORTING_WM_CHECK",

        NetClientList: b"_NET_CLIENT_LIST",
        NetNumberOfDesktops: b"_NET_NUMBER_OF_DESKTOPS",
        NetCurrentDesktop: b"_NET_CURRENT_DESKTOP",
        NetDesktopNames: b"_NET_DESKTOP_NAMES",
        NetWMDesktop: b"_NET_WM_DESKTOP",

        UTF8String: b"UTF8_STRING",
    }
}

impl AtomCollection {
    pub fn net_supported(&self) -> Vec<xproto::Atom> {
        vec![
            self.NetActiveWindow,
            self.NetCloseWindow,
            self.NetSupported,
            self.NetWMName,
            self.NetWMWindowType,
            self.NetWMWindowTypeDesktop,
            self.NetWMWindowTypeDock,
            self.NetWMWindowTypeToolbar,
            self.NetWMWindowTypeMenu,
            self.NetWMWindowTypeUtility,
            self.NetWMWindowTypeSplash,
            self.NetWMWindowTypeDialog,
            self.NetSupportingWmCheck,
            self.NetClientList,
            self.NetNumberOfDesktops,
            self.NetCurrentDesktop,
            self.NetDesktopNames,
            self.NetWMDesktop,
        ]
    }

    pub fn get_name(&self, atom: xproto::Atom) -> &'static str {
        match atom {
            x if x == self.WMProtocols => "WM_PROTOCOLS",
            x if x == self.WMDelete => "WM_DELETE_WINDOW",
            x if x == self.WMState => "WM_STATE",
            x if x == self.WMTakeFocus => "WM_TAKE_FOCUS",
            x if x == self.WMNormalHints => "WM_NORMAL_HINTS",
            x if x == self.NetActiveWindow => "_NET_ACTIVE_WINDOW",
            x if x == self.NetCloseWindow => "_NET_CLOSE_WINDOW",
            x if x == self.NetSupported => "_NET_SUPPORTED",
            x if x == self.NetWMName => "_NET_WM_NAME",
            x if x == self.NetWMWindowType => "_NET_WM_WINDOW_TYPE",
            x if x == self.NetSupportingWmCheck => "_NET_SUPPORTING_WM_CHECK",
            x if x == self.NetClientList => "_NET_CLIENT_LIST",
            x if x == self.NetNumberOfDesktops => "_NET_NUMBER_OF_DESKTOPS",
            x if x == self.NetCurrentDesktop => "_NET_CURRENT_DESKTOP",
            x if x == self.NetDesktopNames => "_NET_DESKTOP_NAMES",
            x if x == self.NetWMDesktop => "_NET_WM_DESKTOP",
            x if x == self.UTF8String => "UTF8_STRING",
            _ => "(UNKNOWN)",
        }
    }
}

/// Possible values of the `state` field of `WM_STATE`
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WMStateWindowState {
    Withdrawn,
    Normal,
    Iconic,
}

impl From<WMStateWindowState> for u32 {
    fn from(value: WMStateWindowState) -> Self {
        match value {
            WMStateWindowState::Withdrawn => 0,
            WMStateWindowState::Normal => 1,
            WMStateWindowState::Iconic => 2,
        }
    }
}
