crate::enumeration! {
    /// Radio or optical band available for broadcast
    #[allow(clippy::upper_case_acronyms)]
    pub enum CommunicationBand as "communication band" {
        VHF => "VHF",
        UHF => "UHF",
        L => "L",
        S => "S",
        C => "C",
        X => "X",
        Ku => "KU",
        Ka => "KA",
        Laser => "LASER",
    }
}
