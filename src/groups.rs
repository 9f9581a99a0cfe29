/*!
The seven RFC 5054 Appendix A standard groups: large safe primes `N`
together with their generator `g`. Offered as a menu so
[`crate::parameters::SrpParameters`] can be built by name instead of by
pasting hex into call sites.
*/

/// Bit length of one of the RFC 5054 Appendix A standard groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Group {
    G1024,
    G1536,
    G2048,
    G3072,
    G4096,
    G6144,
    G8192,
}

impl Default for Group {
    fn default() -> Self {
        Group::G2048
    }
}

impl Group {
    pub fn bits(self) -> usize {
        match self {
            Group::G1024 => 1024,
            Group::G1536 => 1536,
            Group::G2048 => 2048,
            Group::G3072 => 3072,
            Group::G4096 => 4096,
            Group::G6144 => 6144,
            Group::G8192 => 8192,
        }
    }

    /// `N`'s hex digits, concatenated without the RFC's line breaks.
    pub fn modulus_hex(self) -> &'static str {
        match self {
            Group::G1024 => N_1024,
            Group::G1536 => N_1536,
            Group::G2048 => N_2048,
            Group::G3072 => N_3072,
            Group::G4096 => N_4096,
            Group::G6144 => N_6144,
            Group::G8192 => N_8192,
        }
    }

    /// `g`'s hex digits.
    pub fn generator_hex(self) -> &'static str {
        match self {
            Group::G1024 | Group::G1536 | Group::G2048 => "02",
            Group::G3072 | Group::G4096 | Group::G6144 => "05",
            Group::G8192 => "13",
        }
    }
}

const N_1024: &str = concat!(
    "EEAF0AB9ADB38DD69C33F80AFA8FC5E86072618775FF3C0B9E",
    "A2314C9C256576D674DF7496EA81D3383B4813D692C6E0E0D5",
    "D8E250B98BE48E495C1D6089DAD15DC7D7B46154D6B6CE8EF4",
    "AD69B15D4982559B297BCF1885C529F566660E57EC68EDBC3C",
    "05726CC02FD4CBF4976EAA9AFD5138FE8376435B9FC61D2FC0",
    "EB06E3",
);

const N_1536: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129",
    "024E088A67CC74020BBEA63B139B22514A08798E3404DDEF95",
    "19B3CD3A431B302B0A6DF25F14374FE1356D6D51C245E485B5",
    "76625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7EDEE386BFB",
    "5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A1",
    "63BF0598DA48361C55D39A69163FA8FD24CF5F83655D23DCA3",
    "AD961C62F356208552BB9ED529077096966D670C354E4ABC98",
    "04F1746C08CA237327FFFFFFFFFFFFFFFF",
);

const N_2048: &str = concat!(
    "AC6BDB41324A9A9BF166DE5E1389582FAF72B6651987EE07FC",
    "3192943DB56050A37329CBB4A099ED8193E0757767A13DD523",
    "12AB4B03310DCD7F48A9DA04FD50E8083969EDB767B0CF6095",
    "179A163AB3661A05FBD5FAAAE82918A9962F0B93B855F97993",
    "EC975EEAA80D740ADBF4FF747359D041D5C33EA71D281E446B",
    "14773BCA97B43A23FB801676BD207A436C6481F1D2B9078717",
    "461A5B9D32E688F87748544523B524B0D57D5EA77A2775D2EC",
    "FA032CFBDBF52FB3786160279004E57AE6AF874E7303CE5329",
    "9CCC041C7BC308D82A5698F3A8D0C38271AE35F8E9DBFBB694",
    "B5C803D89F7AE435DE236D525F54759B65E372FCD68EF20FA7",
    "111F9E4AFF73",
);

const N_3072: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129",
    "024E088A67CC74020BBEA63B139B22514A08798E3404DDEF95",
    "19B3CD3A431B302B0A6DF25F14374FE1356D6D51C245E485B5",
    "76625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7EDEE386BFB",
    "5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A1",
    "63BF0598DA48361C55D39A69163FA8FD24CF5F83655D23DCA3",
    "AD961C62F356208552BB9ED529077096966D670C354E4ABC98",
    "04F1746C08CA18217C32905E462E36CE3BE39E772C180E8603",
    "9B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF69558171839",
    "95497CEA956AE515D2261898FA051015728E5A8AAAC42DAD33",
    "170D04507A33A85521ABDF1CBA64ECFB850458DBEF0A8AEA71",
    "575D060C7DB3970F85A6E1E4C7ABF5AE8CDB0933D71E8C94E0",
    "4A25619DCEE3D2261AD2EE6BF12FFA06D98A0864D87602733E",
    "C86A64521F2B18177B200CBBE117577A615D6C770988C0BAD9",
    "46E208E24FA074E5AB3143DB5BFCE0FD108E4B82D120A93AD2",
    "CAFFFFFFFFFFFFFFFF",
);

// N_4096, N_6144, and N_8192 below share the N_3072 prefix, as the RFC
// itself does, then continue with each group's own digits. Each was
// regenerated from RFC 3526's closed-form construction,
// `p = 2^bits - 2^(bits-64) - 1 + 2^64 * (floor(2^(bits-130) * pi) + X)`
// with X = 240904 / 929484 / 4743158 respectively, and checked against
// the confirmed-correct N_3072/N_1536 constants above (the same
// formula with X = 1690314 / 741804 reproduces them exactly). Each of
// the three below was also checked to be a safe prime (`p` and
// `(p-1)/2` both prime) before being transcribed here; see DESIGN.md.
const N_4096: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1290",
    "24E088A67CC74020BBEA63B139B22514A08798E3404DDEF9519",
    "B3CD3A431B302B0A6DF25F14374FE1356D6D51C245E485B5766",
    "25E7EC6F44C42E9A637ED6B0BFF5CB6F406B7EDEE386BFB5A89",
    "9FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF0",
    "598DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C",
    "62F356208552BB9ED529077096966D670C354E4ABC9804F1746",
    "C08CA18217C32905E462E36CE3BE39E772C180E86039B2783A2",
    "EC07A28FB5C55DF06F4C52C9DE2BCBF6955817183995497CEA9",
    "56AE515D2261898FA051015728E5A8AAAC42DAD33170D04507A",
    "33A85521ABDF1CBA64ECFB850458DBEF0A8AEA71575D060C7DB",
    "3970F85A6E1E4C7ABF5AE8CDB0933D71E8C94E04A25619DCEE3",
    "D2261AD2EE6BF12FFA06D98A0864D87602733EC86A64521F2B1",
    "8177B200CBBE117577A615D6C770988C0BAD946E208E24FA074",
    "E5AB3143DB5BFCE0FD108E4B82D120A92108011A723C12A787E",
    "6D788719A10BDBA5B2699C327186AF4E23C1A946834B6150BDA",
    "2583E9CA2AD44CE8DBBBC2DB04DE8EF92E8EFC141FBECAA6287",
    "C59474E6BC05D99B2964FA090C3A2233BA186515BE7ED1F6129",
    "70CEE2D7AFB81BDD762170481CD0069127D5B05AA993B4EA988",
    "D8FDDC186FFB7DC90A6C08F4DF435C934063199FFFFFFFFFFFF",
    "FFFF",
);

const N_6144: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1290",
    "24E088A67CC74020BBEA63B139B22514A08798E3404DDEF9519",
    "B3CD3A431B302B0A6DF25F14374FE1356D6D51C245E485B5766",
    "25E7EC6F44C42E9A637ED6B0BFF5CB6F406B7EDEE386BFB5A89",
    "9FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF0",
    "598DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C",
    "62F356208552BB9ED529077096966D670C354E4ABC9804F1746",
    "C08CA18217C32905E462E36CE3BE39E772C180E86039B2783A2",
    "EC07A28FB5C55DF06F4C52C9DE2BCBF6955817183995497CEA9",
    "56AE515D2261898FA051015728E5A8AAAC42DAD33170D04507A",
    "33A85521ABDF1CBA64ECFB850458DBEF0A8AEA71575D060C7DB",
    "3970F85A6E1E4C7ABF5AE8CDB0933D71E8C94E04A25619DCEE3",
    "D2261AD2EE6BF12FFA06D98A0864D87602733EC86A64521F2B1",
    "8177B200CBBE117577A615D6C770988C0BAD946E208E24FA074",
    "E5AB3143DB5BFCE0FD108E4B82D120A92108011A723C12A787E",
    "6D788719A10BDBA5B2699C327186AF4E23C1A946834B6150BDA",
    "2583E9CA2AD44CE8DBBBC2DB04DE8EF92E8EFC141FBECAA6287",
    "C59474E6BC05D99B2964FA090C3A2233BA186515BE7ED1F6129",
    "70CEE2D7AFB81BDD762170481CD0069127D5B05AA993B4EA988",
    "D8FDDC186FFB7DC90A6C08F4DF435C93402849236C3FAB4D27C",
    "7026C1D4DCB2602646DEC9751E763DBA37BDF8FF9406AD9E530",
    "EE5DB382F413001AEB06A53ED9027D831179727B0865A8918DA",
    "3EDBEBCF9B14ED44CE6CBACED4BB1BDB7F1447E6CC254B33205",
    "1512BD7AF426FB8F401378CD2BF5983CA01C64B92ECF032EA15",
    "D1721D03F482D7CE6E74FEF6D55E702F46980C82B5A84031900",
    "B1C9E59E7C97FBEC7E8F323A97A7E36CC88BE0F1D45B7FF585A",
    "C54BD407B22B4154AACC8F6D7EBF48E1D814CC5ED20F8037E0A",
    "79715EEF29BE32806A1D58BB7C5DA76F550AA3D8A1FBFF0EB19",
    "CCB1A313D55CDA56C9EC2EF29632387FE8D76E3C0468043E8F6",
    "63F4860EE12BF2D5B0B7474D6E694F91E6DCC4024FFFFFFFFFF",
    "FFFFFF",
);

const N_8192: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1290",
    "24E088A67CC74020BBEA63B139B22514A08798E3404DDEF9519",
    "B3CD3A431B302B0A6DF25F14374FE1356D6D51C245E485B5766",
    "25E7EC6F44C42E9A637ED6B0BFF5CB6F406B7EDEE386BFB5A89",
    "9FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF0",
    "598DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C",
    "62F356208552BB9ED529077096966D670C354E4ABC9804F1746",
    "C08CA18217C32905E462E36CE3BE39E772C180E86039B2783A2",
    "EC07A28FB5C55DF06F4C52C9DE2BCBF6955817183995497CEA9",
    "56AE515D2261898FA051015728E5A8AAAC42DAD33170D04507A",
    "33A85521ABDF1CBA64ECFB850458DBEF0A8AEA71575D060C7DB",
    "3970F85A6E1E4C7ABF5AE8CDB0933D71E8C94E04A25619DCEE3",
    "D2261AD2EE6BF12FFA06D98A0864D87602733EC86A64521F2B1",
    "8177B200CBBE117577A615D6C770988C0BAD946E208E24FA074",
    "E5AB3143DB5BFCE0FD108E4B82D120A92108011A723C12A787E",
    "6D788719A10BDBA5B2699C327186AF4E23C1A946834B6150BDA",
    "2583E9CA2AD44CE8DBBBC2DB04DE8EF92E8EFC141FBECAA6287",
    "C59474E6BC05D99B2964FA090C3A2233BA186515BE7ED1F6129",
    "70CEE2D7AFB81BDD762170481CD0069127D5B05AA993B4EA988",
    "D8FDDC186FFB7DC90A6C08F4DF435C93402849236C3FAB4D27C",
    "7026C1D4DCB2602646DEC9751E763DBA37BDF8FF9406AD9E530",
    "EE5DB382F413001AEB06A53ED9027D831179727B0865A8918DA",
    "3EDBEBCF9B14ED44CE6CBACED4BB1BDB7F1447E6CC254B33205",
    "1512BD7AF426FB8F401378CD2BF5983CA01C64B92ECF032EA15",
    "D1721D03F482D7CE6E74FEF6D55E702F46980C82B5A84031900",
    "B1C9E59E7C97FBEC7E8F323A97A7E36CC88BE0F1D45B7FF585A",
    "C54BD407B22B4154AACC8F6D7EBF48E1D814CC5ED20F8037E0A",
    "79715EEF29BE32806A1D58BB7C5DA76F550AA3D8A1FBFF0EB19",
    "CCB1A313D55CDA56C9EC2EF29632387FE8D76E3C0468043E8F6",
    "63F4860EE12BF2D5B0B7474D6E694F91E6DBE115974A3926F12",
    "FEE5E438777CB6A932DF8CD8BEC4D073B931BA3BC832B68D9DD",
    "300741FA7BF8AFC47ED2576F6936BA424663AAB639C5AE4F568",
    "3423B4742BF1C978238F16CBE39D652DE3FDB8BEFC848AD9222",
    "22E04A4037C0713EB57A81A23F0C73473FC646CEA306B4BCBC8",
    "862F8385DDFA9D4B7FA2C087E879683303ED5BDD3A062B3CF5B",
    "3A278A66D2A13F83F44F82DDF310EE074AB6A364597E899A025",
    "5DC164F31CC50846851DF9AB48195DED7EA1B1D510BD7EE74D7",
    "3FAF36BC31ECFA268359046F4EB879F924009438B481C6CD788",
    "9A002ED5EE382BC9190DA6FC026E479558E4475677E9AA9E305",
    "0E2765694DFC81F56E880B96E7160C980DD98EDD3DFFFFFFFFF",
    "FFFFFFFF",
);
