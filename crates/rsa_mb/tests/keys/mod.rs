// Copyright 2025 Irreducible Inc.

use hex_literal::hex;

use super::TestKey;

pub const RSA1024_KEY0: TestKey = TestKey {
	bits: 1024,
	n: &hex!("994a5f847944376e103a289713f5c11c4c30276de83247b3edeedb8319b8ef0eb3a88276297bb3fac2e41c9da28fd3843e2a55856cb81584c3713338234a7309f67face2a64b9f20490ea1b399b035ea8793a5c61d08dd043aae61bb13a48484bb4c566d1a0171b0857f2c96c3a423b2d1c4510ce96c37a8d8b542212d611391"),
	d: &hex!("5fea407014acd17e25db2e30b20590ca930582766bd6a234fc88fb8341a20cbb07414638876666cc5e0bfbb7cad2f1c78a5a54dec29340abacdaf4f0886c7a23e6babfc4fad76e3f2aef62b425c36c1856bfa0e5547cde2ddac81c2698ffe52054030e5116dd68c05e2af2a4ed34067639afaa1981696bfe1d8fbedaef5b9401"),
	p: &hex!("cc3f31eb63be18fcb0e588b7ca95cf44ab4f216d0811efe000226edb94a0dd9d87b44d9f02e4cf366ce28b6208cea702b69671b280fcfa295587821eeb9419c1"),
	q: &hex!("c021cff9ebfe4b4587804e5814d9cd0cf63b579cb07db9471b904e803f8d816842431c6ce4f8f72b2cb96aa68e710123ff4ca375548202899289760081f94dd1"),
	dp: &hex!("4b193d60a0970816f9701c59ffba1fb0cf105469039b9cc88f241a00d0e0693bffe6b2d7b1b7b1dd0022383fbe9f4557410d8616ad48d72e958d32b1edcad1c1"),
	dq: &hex!("5705f9a18596a499558a73f1c95fed5455a30347e158d0b6b871605d0e6c1595178e362dcc7847dbb26239403f7c47bbfa42c836b8943a79fd796d8d45519a41"),
	qinv: &hex!("9d882c0aed61e70ed530495cf5f0097bc2963cc1e103611eab20803ec099095e260410a492dd6c42e7d003739cb70156e65fed85c3d9ae109a42d780bead802f"),
};

pub const RSA1024_KEY1: TestKey = TestKey {
	bits: 1024,
	n: &hex!("c11b683ab86e40c2c0451e0a5a1593e14501584b49b4d9af55e9574b564605c59eb1032d1eeca7fe40a26862bf1c682962689d7e95a01dd041ecb3348f73cdcdc8b478942f7e9b5b3a213f6ddb6923e6a3ba70f808b614f2593d6eab62338a904bfaaef75b606ab22102e9108f44f00f6097e2f60b3cf8ffec2145134449bd15"),
	d: &hex!("07cfaf00a91334a56c179fa6758c67e5f5df9f0db4968f33ab7afbdffd4669d75b9af770ecce4fe15605fbc8fac81062942b7d2b70ac0068bb31f2f1ce57b5dc6a241138480e33b8df0512b98ab63d0527a67d3562a88912765ad82206c08058cf6bad6b34eff7dc5ddfdc673ab9a60789edfae1222cc18240bf3ecd62b67ae5"),
	p: &hex!("df19dbbf8c299a541b8254a5766e8fbedfde4c0852c1f8150de5232604bab659ca12fc37dd38b2b64265bb780066d104737f5e6828be4a46f39fa7fed612f3ef"),
	q: &hex!("dd95443ea471b4bb884553c9e5b96bf20246dd64607fc66fd7a0ac63f6c51b8bcc8128c3b515c6d2a930b4c80e8a9d3cf3b575491fa1f5cb95614e9b3053cb3b"),
	dp: &hex!("7b38c8036ac1cba86aad385d4f254fa587f63a9e5a3f21eb570a58b875e23e37278206e63ffc41d0a2a997ba76d652d9978520ba7cce652dfcff108592ed52e7"),
	dq: &hex!("4f6d661d1e4d33ffd50524d7c66504f0a72847cbe75b66024944eb069a3a65796341191fae15b443672a726313f35411b93a5e646bd65e892f6ec60292fc3669"),
	qinv: &hex!("582eeed510844cc9137aeb45073cc3d9ce10eb0fc963f515e788b12e5bb60a77f3538683b1c02ad9ea8eae373ba0b83a52d0913653b1ddc9de3b480707ec9b9b"),
};

pub const RSA1024_KEY2: TestKey = TestKey {
	bits: 1024,
	n: &hex!("d4b91ae675aaffe425cdc732f8c41e9facb0df10d7651c737ed6d4e7bbb3867ae223cc155874acde5f424dd628dc4eb7733216657c72e730d5f6bda82e312f25dd6c3d18f08c0e4928c8f3b5102037227613627e9c14dce7478f7cb238dd1fc6492c9690cfae8ff0e7c75132eaafacbae148b9e3f22004fd65b8240e132b8e11"),
	d: &hex!("0b21484408a212d3781ae532488bd2625e61beba1ddaff7b1786dc0ae7ea43be0839014398a63a294468aeb3e6dd680cf72d06b8f6a2f86fb8b23948246a9461d95e6259a66ba3dca9efd28d26ee0d64f3550a1fae7c2cb8808779e3f13aaae7711119bdabf59bf5cb88b3e31c347943a73876f29c46664377b359001035fe41"),
	p: &hex!("f0d7b1c7261f3e71ac5f2d6cd4941575d30dc61e7335172c7f42ab9dfaeeaf9d826a2d22a7f25b30964d12cd0bae7aa82d6560f77d37456638ed154508d16c39"),
	q: &hex!("e21c5decdf0241393a3b00aa85380b0d8ffc2b83b9cb7341e4bf02d822433d2900a72d1fc9924130578ff0058e67e399460eef472611fe632438ad53a9d0e099"),
	dp: &hex!("d41e95147a8e00186c21b3c76b7f355b7dd45ecf08d7149efb42c416332130094108b4d2162b4d878089476ad2c40c81bce1d24287c53b5969ffddc0dca05e79"),
	dq: &hex!("a0b40ea192e2b45eab1f525adfb23450e05c16c559a0dafb234c0b06785b97b573ac5deaf0c5cd2541a6a0ae22477e40eac5249549de9211fea575b337c7a849"),
	qinv: &hex!("a34d2b74d45d0a8c3d3def064a4de43ab62277ef584f7372a205b1ee0ce72bc826b70a28a9232e8e18e3fbe9c3bb4e5396e99a4015bd5ab9c995a795a8f96f7a"),
};

pub const RSA1024_KEY3: TestKey = TestKey {
	bits: 1024,
	n: &hex!("ed70d873552c1a5f1daab6e2a396f0bee7d3ddc230e8932bbcb02c4c7f8e8cdb669d5ca8492f51afe7ce8567cc23c19a895973121259c9495e7753b098d17c159cbc70722da7b1477643c662d56575ceba3e95321ba29c7ad9de1617b621e22da2a4bcc0e3fd2e8b2849315284a5709d54627d7643ee4d9162763fc6e9451fc5"),
	d: &hex!("d70fbefdb7c79a9b4c63b402d3e9836566d59fa6a46603e739a0d87ef18a4c4aed46db061243a9d98a3ca4d8bf2e23cdb55a2fbfce9f44920fde450f4f5b6ee6e5c2540105f3c3c9c47d7ffbe32907edbdac33a652f6211c9f079f3c55d49ebacaded593b2cfccf7dc150d041a1534dffa1fc8f65696082910eaaeb30294b801"),
	p: &hex!("fa7adc0e602d41b45424abc2c16545fae6b79c1011190347fe68087299875a14c06bf5e595de3fca5635b348bd48abd4e63e581cd11af5ea5de27340b7ec48b5"),
	q: &hex!("f2ac6c3740c2d8bed8653102bd093f52e7b3c00e8dcbc123ad12b26805c276eb0644c804cf00b5dca89e6cadd628666f13790182b6cf11d358f39389b4d534d1"),
	dp: &hex!("1c88e68cd4b4132a21f3d3856a56c9341e1888b4e3ddbf9bf2059400ca30bb3865fb6695f30ed0a19254a7c9ff9649cd0535d0ffe76a74dd70389dfc9f775189"),
	dq: &hex!("a0582b5ccaceb3f64df776cdcf6817ce48c8ad63306fec1b0d95a80a319c0f85356c27197e4982e0dd0d68d3e80863be8b084e663732551de7cd71b3f0a75bb1"),
	qinv: &hex!("03a7babf12f646423e44524dd1a310f320dfccce80971685a16b19bdd83f897be02ca56cf091b66043d91dba78c9c06820c03b2517e86600ba2304bb8de8d909"),
};

pub const RSA1024_KEY4: TestKey = TestKey {
	bits: 1024,
	n: &hex!("a1407f72fb657fff0b558f5f21abad95ce2947da99a6bc9760cd4f2cef898f71737fd5599a64f3d3e3c75d09ead1374cc78c6c5667a159e1d5b7bb055ed922e512047737412daaf4d8bb222ab0c32f188109cfb5b123b45560af4a8cc73a6b1cb71fede9653da90e3a20205b3aa08167c14d73a253cae244efae3792a3f173c5"),
	d: &hex!("329fcc236e1794929e9d52f09be28911b1f2b5d3444fdb7f6eeda600c6871a5894d93a42f23ce56bcd6406aa9964eb86985356a3ddcf0327ea6fcf304571c80940e01321f72463b5b61db15a3b9b52299aeb305970d0bce1b2659feff57303954076026242eb16d724b7e466143dd477b0d77d18622555e5990c5e766150a075"),
	p: &hex!("d552cbe8575438b2dc22c2e8da796657e9ebbd3a3bd13ba6a87ec566232628a9e9cae32240c6d664df9beb1c10464138d62fc4e37282da62d656715c71532c1f"),
	q: &hex!("c182e605dc84f0aebc03c4a019ae62079c1f304c6fd537fd59ec3b928c4d61b66ce388776bc43ab6a5bdf6aff26036d527eb4df89bf4da84fb4b8fe11ec2a39b"),
	dp: &hex!("464763c424d92b60c9a36e2136b0de25c27c16b853b2a7fb4cf18ee90a556cfa257ae0ff8ce5b50640a0e681355f5fe770b1062584b955675083e40ef78ad633"),
	dq: &hex!("b149458815324e772795a42cb19a8c0140cd6a287d44b0d911eb55e0bb5da1a9ca34e32fd5b19fc0fa3401afccb4cd47981d020044919d29bc38cc068971f505"),
	qinv: &hex!("c6e27e6d521313a338af0ca940c20446f006a7ce6931a4086f7f58bc8cb4ce0c2a3eff1571a1af129ca57218988626e4e961890f79335d8bfc1d95cdc2a803be"),
};

pub const RSA1024_KEY5: TestKey = TestKey {
	bits: 1024,
	n: &hex!("d6693c3eee66c7398272c6522c5a972d4fa09147b7df8e6bbffde5202bf050fc293f0a04415c6f8116b8f6f06590b169c3bf1f8f6be0088f07ce49a93c9a38841c8297430268d451f2f6281ec18eaae580a1ad0b9a6587b4ab786f0aa711fdad8fe0c41e4cc614d487b158b6d862987b7434197ec0a8ffc100c087ed95e3e079"),
	d: &hex!("02883fa3e6a0e41d73c2f340a93170b3a24b1d2c21a9cc3ecd87ac1b1329c56b14f99f9ea93ef43a2c10872a13a8ffcf65f66de2fdbd299cb6d4e2ddd2cf6777726a9bdb7c2100bac8faf3e1a970472ec27b53de8466bd7f3459563855b19b15f4a6bbbdc9764941037112b8c78512dd74335bfd6293869ed6ae80720d1829d9"),
	p: &hex!("fb3984fde4f61ebedf10cfe5847c706caf8e1ae60704ceeec79b301637b995278c664fad7c9ee78be10a3189f291f1b71c92f1044d79474a2a4004b3f1b5cc33"),
	q: &hex!("da7c93e48a6f1e29557892e4caa6dc3225b82b011a91b4d28271e51981e310b06fbc798f8169170645624d9751b01c56d7b0f89aad18d573198813e91735b4a3"),
	dp: &hex!("645d385a4e4c5d4017d1999cb1ef1ce2eec7b0cb50e684dd33f535a2caa463882739007fe8977b1d90cc07ba7aa3ff930de14e544fb731d9d943361dc564c1ad"),
	dq: &hex!("32b4207a342a2f5cb64a2204d886baa92499c5d91eba5bb552b26dd16a94306651b7f299fc155053933c89f728eceed6b47d8c6410f1a76f6ba869be79356c73"),
	qinv: &hex!("722b8c9c81a463139408164aa5b5b56d956769970df29590e4b204d7367d30ac6566422015c4896a0a5da0878c11499b5307bde576196d0c7925b84653f39ec2"),
};

pub const RSA1024_KEY6: TestKey = TestKey {
	bits: 1024,
	n: &hex!("ac0337501289ad59d7ad0e17f2d3cd1184c5f18917d0ccedb1400fcb4a873a77927d21f06e9e34fa7b34b1af26a22b04b08bf27d9396659ec11372fd9d88f2e5d3271519bbbf72678a3bfaadba80f977dda8c39766be68e1e3d5456bfe1fc99dd9e4dd5c9989583fff2d6849a2a038e198699fb85f569457aa11d7890f1acba7"),
	d: &hex!("62304bc8b76c43b9ff3557d02fdadb3a5ed227381c922208a49f6ee49a9c6ab18abb473e59c6917352151840650b39072a481899ba3fa5ae638458a590e175d4ef01f858a0c19d08b83d09c6a31470dba77c1c6be4230fac8f47218bea283e09b8b04620fcfec60b3ee0a146e72db6f8171f5b3fbbec426c040de7cb5fb8fea1"),
	p: &hex!("e0559e6d348ba7a12f1ac2b03236241722d89c519d6717cff4138f9eef5556cec57f9066087c4e53e7ffac0d925fc56a8fa02230fd5393b29ede2149c93930d9"),
	q: &hex!("c44aeecea0659c78e22c46ec98c35abc3f337d0439d23f4b57f3a1b75a806ea98893e5802c678650d7866bb1d4775f6701d69962edb4e4a4119b904ce15e107f"),
	dp: &hex!("65690ef71afbcec9647bda6ac0280d6490120f882d797f20389be71ed7de622192d239ba86377b491ee54b27cf758fcebe228b924dd24c4040e4f5735f8d84f1"),
	dq: &hex!("27db3b30135b6e71112382672a01889bee8d4ad61fd373ec9d78279eee2e63c9e2a47d16106e18d4b35e64e19fcd793e961df7d92180f867e3f75d4e6ef8458b"),
	qinv: &hex!("7078a754b9d1295651c3a81a7891f3bf52c1f427663ac1bd3ff3ec251bf5ebafd65779e13dac769bb5a9c2d0fb23b598ba0e4e7dd0ffb9726bee2e34fa9ec619"),
};

pub const RSA1024_KEY7: TestKey = TestKey {
	bits: 1024,
	n: &hex!("ce576dc57073cf9120169f5cc877d4b8621f69b34daa879d4074f416ac3dad70b2642a20da55c4261fd741aa310a9580d6e15d87ef588af8528d9bc3961925a6979247ac22cdf3468531eadb9652fc96ab83237cd764fe17c6cff636240ac34e5cb1df1f6b0b52b954a2e446dc5434db405b2eff66b36efd1f029e57e3618427"),
	d: &hex!("8d0fa2009f2edd10c69210a23a7e09537fe91fb6af7acc3949ae6a8bf1763cd2d571ba87391bf6fb653b202dfc56d2fc006a9329720be2fd7e5a46c9401cb2ea64cb30366144a10dd2876410bff4af3b2baa29b8bde9cdd7887c95521192966b1ec71334e38a7ab8549e6572c2fd60d204fdfbc044072709acac24ed0af69241"),
	p: &hex!("f49a79c4b19c1cea20e7f131e9c96ee6340137721b272fae866246412e501974e35b9e9f1939df6f6890f0aea9d5ede79342ba15de106d41863d0379b1332747"),
	q: &hex!("d7f494e6200ea4c184cfb048b6f210be860c28028840d31b257e11f82d6b37a8a8b2c6fbdf6def7e325bc07e82bffcf5d35e03749f71bacd2841375331ccec21"),
	dp: &hex!("2ace41d30f35ffc5655ed1d1e754ee08713f694199c8e0ca4d1033b542729811e19bee056fb7b6075c28494677c84d6b02556215639842567e347d4035a77b0f"),
	dq: &hex!("8d6a586729eeececdcafb45ca990726e91113cd20baf878e6b4ad731916c789235867ccf4b4c8e5c3155ec03ec5314af55ae66cce3ec71cb0ee545f970cf2481"),
	qinv: &hex!("63db4786ff8f9d19b95a0e8993f9a97448b8e9a181833585f45e6df28312ce3339b79914e62f4eec2a5d6b253247725e6153d1b47d4665353a5cff04aa2adb76"),
};

pub const RSA2048_KEY: TestKey = TestKey {
	bits: 2048,
	n: &hex!("a8e01bf977ac5e8c772438a3bf7d3b19e4545dcc700051c16b7643ab0b66893b2385c74a4adbf3953a97fafeaea58ed3323e8e00d390fe905288387363b71c397b8310309e59145769b08a81987861c0cbd14c9abf5067759b36242e894d14360b8458e60d3fc3ec831254898aaf408ce2d4de818b6a30613c4eb3080f11ded14864b4e906359217eb52c37ceb74d38829ff32412f6c26551a91c88410c0c3c9be63effdad6d8e3ea1a3c050ffbb1c88c05e022a089de10e39d1a47d5f4904aa3ca79975c5a3d18c07aff333a057ecc820a3ca8eb143473e4ad14ea1ab34485d22abb5705ccbb63a80125d9d94f4dd496503208a5ec561f293306aa41661716d"),
	d: &hex!("00b3c1da0531ddc8c6bc0b523efb15d2533d38909f8c98ca6d9875ca91c710de02954d51554359dd6e7b704b3bcdab6cdc621f3408ad2b29cd760c8a0a499a1ff11007f2b3cdda044d07b363bb8f1094fd23f726139291838f2c27f55b93caf8388f09d1970f835089f0fb1201561e3617c15bd57d0f697916079bbdf656142f97d9ea33a5111e8e9c6d64d00e4d6102d0df321f6cd55acd65670491a0beeb5a118bc4980c6c179b62767b0b21ae784714543ed281df2a489c01d0b40ef1c8dd923fd1b574b0de4688df8af7337920240b8b09ded268d92002f67b1c3e71a16fe181639f782277de8e8954dddc9804c35fcf7d53006bb39e798819df6abbacdf"),
	p: &hex!("e124e53ddc70ec2171b26694beedcef75d8cd742098d2bdfd30d20413a929747ab8bbdfb6aa3ed35c3da96f8de53850bbef1cb186bfa8c40ce33f2ff0d145e7583453a41afa4dca5e491b7d7cc67177d8de05777e5b4018ab96888912575e29ad8ac5e669ee77568c0f343af3de0c136811dcca0435513cca7d2e7e045e13797"),
	q: &hex!("c0050bbcc2a6782edb531a40d809c6d93f0c6e244c20247f6bc4911b8dcc6120efc4ce213f5e08dd960b6303d69f87006d9fbe1cb3f6539ae2ff32c95694a6cfa01f3d983b44fa283a88124375b05fb3262db048caee1fc917c1f3e2e880f9b62158efd4e3ff7e546b254c7ad332c6af3d457eaaef17f5ac96be5d2b86329f9b"),
	dp: &hex!("2df63d4252b54ecf4909b57d5a38ec0e7daf99e626530688ebe9fb12b5e56532c16786c243b3f1620f78996776e3affe84dd91ab8ba79b684370418425e469a02dcb3d2859b61b41569714e3de1b91a515089e72a0970dd587223af6fea1c1400149b6ffd622c44a3d51ac18a35635bb6dc26a9ab10436458a6138eb04f90443"),
	dq: &hex!("700e41c43cff72a13d82a88e70c47bd36994b26de232dbb9b44538bd10a9d580a80b7c93306c8ad5eceae634663a204962afd6fcdf147fc3a27674c7c40be9b0be6b9cc14acd3d02deed6b630cba098efd57aa49408b67e72d43153534a39795eeadfcff8ab21da1dc091f318a30567c0b5093d3e2c563abfd28482ccf1a99c3"),
	qinv: &hex!("a36460ebdfd0c9abcda199d043e101d6a136de6514c08fed763fffc292f1945f69c62f8c9ca6fe79311b97c8f0cab59385aba005bd2e2b71e2f08371bf7afb329a41a601ea6eaa9aa6d7f5f2c48b73b2208ac203cb93a68c140eed61e132a757f68f6669977ab69cab5fa60a24308f5741ba4d64c6571d842796e582a580bad0"),
};

pub const RSA3072_KEY: TestKey = TestKey {
	bits: 3072,
	n: &hex!("cca919c3dd62cd7c676727dc48a955d0bf98ef117043d8341f353612d3bede6d76461e489addc7c097947ab66081acfcf6491b6c75cc5b8259cd00e0f7c79beaef8c46514f0dd42ad20d9b51d88e92f2e3639a1694d8c9b37aef631192ac9057099c91134fe1cf39efe7e4267c11c1d96f7a4042fd0f9a950db3f766307e2450640a8ae1887e67ec3b6c7bed8a003d8f57293f368c9dd186237593811fa4a3e5917bae6f79e93c2cb1eb18b18a3b961a64e9625cfe38dec656535ce2eea3340bdece4496281d68f422e77df964c37e3e58bf306cd6f3e09047ec87b031fc52ffad9118d071aae6b75352a1326961f96d9337e2f03a91b547e92c88ebc50f7481b6e67169bbbbfc273ccea734c1f1b85f16efdf2de36400d62535c094d8f589584fe110b3c2129d415523247c6c44479e8bea636071d0c604813572b7b6c7fcafb86ca24ca00fc931e30901447ea21dbb6e7147f591b0f1a7602368519954d5c461973bec7b0080c43c52ffc39662129d74a1df1bf49c88724f3d4b3c66290db7"),
	d: &hex!("08886bccba0ef61696be3b0238ea79eb9f2a8b9c0460f69ed6d91dd19c8fe4d432a97d7699c65f68686058916e53c77cc2cd1f82dedb99136a5f5d07042dac373cab04b4176f8d73bd4f2159f7ce7689251630729f25d108c3a81a984f66390a65ac55e0b4adc6cba29970a54e1f3db23f8a53bd92b17c489937cdce1beb31e41e731aa5d205320975416039f22895d6311d699094d0028711a28ce446079d1f75e65c5cc532e1d189857ba63a307e1811a028d74c02ba23a44054ab3d80b9e24a3ed1c0d2c9a9ba3c073faa959f117502a809c6db7b91b60bb7dc4d421c07d95b831b93f33341355065519e55e98654ea23f6fc7130ed78bfa445e5dc158f3e9258d1380f7254b9495d5af0d5d4d2dc32f305c0f6b33b84a5ab63ea6b8b545e8f480353576f3ee38bfb6348a4bb3ba4d941f971ecb56abbbba8f9091dd3039a9a3310baa7bed0e67b761a780c6874df35473b7fb0a8d0ba609edcd8516a449b1bcba40fe12279aff35ef5688f921b7865b780cc3130dddddda85661570e7f59"),
	p: &hex!("f6bbf6887f018abe5428807a1375e2422fe5868af59bfc13e8b575025b7ed7b51d236e28267d02995d569107b3200e114dec77b298d2a4c983b786dbe59f192c234fe617194447c13397f6dec4c25e8c2af1fd9358335323017396708f14fff3c28c72523103207576db7526a8d3b69fbafce9980b1c0227930f6300bf342facf9e19d10e19c4d669b87741908c6d8aee7ed09c0d5443d36aad00d2f4d99807f32b422aef05e66f7b4a5abb48e0f5bea9fa62e24f9a06245c1ef88ad5fdee30d"),
	q: &hex!("d458a709d2795caff2b7bce16c7a9987404b7b8ae60e052ded4c234a874f0e3d8c320ee9c6d48da44f02bd94138b93a037e1abf49ab2c8545f645901c10ebddb4be10e0121196599f1f1fc5a930a3638421ca0391aad69926ca8a72b0b6fb73e7e495bf650889fe1e92ae2492adf0499c2d655e1e5a9e1e8f0702beb97f62cc5468ed09b2472c0fd432437672018be763bbce10f1ffb8ef920b6243707c759a36c8b7fb38efd70209e1aa8700e82cca0d00a53580b3a5717767dcadc403112d3"),
	dp: &hex!("7d4436c95bf9f36fe8185c0a1e81362b365808b3da38a485931b3559ca0c1f05f3d23e26224c4b9a8399e4ae0d12543212e6e06a8b4e3e9d94c303b3f6e38c8b2d2e6e7a01b8f9d92c119623c9af89030ef6a7303c926a3e168991b279e24684829c7d9a1f0a205ba2c98eb3def905fa189c3918996351f0b7a8133298e0ace7dc41e05566c5cd422fea5856316f8b2959d4ada3fa62d7d53e69bc97ec84e7892cbbe9f3f953646194949c15621e88231984ec5e97620722b570a06aad86e2ad"),
	dq: &hex!("0517eb49cd06a4368437ec0bec3234a48de241a05f4c4ecb7f39a84f0d57d41b9dd5458e4dfaa33b21ba0b1a162deee894ee90d5593098a58d7436be5807267eb01f41dabd1482df62724f7f4caf9e055370a4573a50968bb0978b0af94740b9fb057f73351351e2755955fc334f0e2932073a2025062229183b58925a1ec98c21d9231fd58bfb1d1813325102f0150179055ad0a60fbeaa3322ab53b6980d8a61fc26a003fa084a80005bb1f46726c964b41ab3adf1444d87c614ab9bce9189"),
	qinv: &hex!("97b157007fef5a5867f47b179fe940553cf7a47ae5584af0c9df8b0b54b549f77f0c39e0103073abe45da3270494900784cc2536e02a7f4af8e11f7897ccdab88c30d5c850218849041ed2ce9477287865d0c74ac47d2c0a423b32a12e035490491fb3c4a6fc2b53f6e14afab7968e76d2a812ae3e7ebe2259bc1cf74b1de6944c65fbd497bba922cc02da8d10d4667eec0a266faee4e5e4c9945d36100b79943f5ed7cd3d2cf34811a9791669e94bbcb94b432d81eeaaaf9126978b495e9b7f"),
};

pub const RSA4096_KEY: TestKey = TestKey {
	bits: 4096,
	n: &hex!("c4f7925dbc66df54c6263ca9c90a49909a3737f1b67a219a26c3d7272f7b7e4cc0dc41193bc931b90a1be3018a8becb2ce4a625b88a5288c1305271eabb65cf03bd6aafd1fdf14eeb8acc92f5f49667abb00469645e3189bcb3c9fa53647eaf58ef339e3fe67176b9dbd94a088598b4c80d2d5c82f61ec1d2afea8b0a479027a4e855fec2c3f7dc7a84e104b7bec5db295bad56aed6f93443d80ce4ec0a0b83166f5563456722d09840d7fa30fbb6c3d281792c9261cfc088e0dbf04823b9e5c1b90693e6d422e61ddb56b7d9c6866e6ab98853cc42d232d2a5d4abbd7c12cadd0b0091bc287e7eb1c4aa4fcdabe426f0eb8213ccf53a1697d54143d01c30ae913ec911a81e8a8e8bea163d8e9fa2d56d05b9be0c8c064556ff214f0a5c33c3138c56de9d360cbc870cbc11f09f79fe808a2bc409e9964ccfa9d07a115d12de21b05da9360d763f125bb462abbff7b0ea19de2edd6ccb82eb6f999d8d74fa249283d811dc76f89c300aebedbf51e633a6d0a9867618b1112932dc6f9f64f1c164692154614cab24d8360673fb406f0d3ea84048292ba65cb6f9a89f5b8ded1d9dd574cdccb2e0971f4cd7d69083f80483f25eb872f07b738cc1330c514ad2100892d67f474336449dc5e887fc56d689edae2a596900f6932f84ce81ee82ba9c1fc82c489f08ece5bcc4fe47ee2159c71db2ac9dcae53413ecd6a3d5981bd559b"),
	d: &hex!("32be02e782175076a2fb8bca43c012369dfc16bdff0014b3054493a385307fd79f21bee594c8deb5e85c49cd865748d9c19a591f72a2f5c0ac4fba05c53fdc4e8963e2b606256edb9718f055736b51ead14d1f622c4bf6758054b45e180f4c0109dc303043c4643cb5acf6e2aa6dc31ca8dd67f4c3fc2a9b530dbb0092c697f451513be67879bcda184a50195a2a08f36e6e6cf7b886737e7387c0de79f28db1307088ce3fecf71c49f83e471050fceffe69a04790b98bd65a5e413514a5ee4495574d3da76112d8e4888dd214deb28fbf6a31fcf71f17be5579263d2136a35f7df133cf827c87ab42a51a3f07cd57090c56343dd9bd964a3a5ed43de93bc98dd17fd4919511bdd415be0df94125518d29ada5c79e75b7017670282323924dd8337430442db6fbcb500e991b5bfce0fd31602dc75e343ef3cc196a9a5d59a819696a839c247213f8839c8dd59eab08512f9a43c604048c05ced9e18b4ca80188b6716be2dea2fc4598b910bf1d7a3d8c7ff680c5d863463afff48807055220512ab6b158311ef33db008a20fe5633ff91a222598f7c6e036f9eb4d7ad1fa6ecf63ce14e57f126f9861ab6316d2b10a43cbe8b10df14dd3f85e7997a78f8e04cb88d9b61c27ad04eefe3ebb9dcee742ee23c1af91a994ab7b6bd552797a446038c603c6cf7353705046f506c27cbb4464773f73ed370c31de14ad89fe60a024b5"),
	p: &hex!("e25988ab625f57b97af4aad3ffe30d73b564fe013ec74eb223b0b6151972dc7a000baf9ee587d2374a09c783f6c00502a335707191f54dece30932169bc5b8ac35aae540723b098299ce6c180d3d5299ea485a09de60947d31fec7fc8e8afedc0464a2e08c6dcccc2a940cf716fa10dce670e1ff863712fe2c707e58becfc98171479fd85246792e30902bb0f5f9ee0a3027ee65037b462ec17c9be76aa17143906068532f082fb2bf10c424aeecc13375a00d5494cf1be8ab31e842af906bf080852ad9ddf94870c3953a8fb5738d06dcbbcdcd6b56ce6ecdbf30c5a392625d7fc4a01a44a058bdda4ec90e2d2df0d9d82634e7b41a8db7b60889541f8bb6f5"),
	q: &hex!("dec4b66d819aa26fcf9fe63cc3b84d29d030f2c7cc4e0ca6b9ba7d431188db39429ef47c7f10f0bce019c999e7f63f179c115ac41ff8c3657292c8ebd84db6517a08dbfa2174a4b09defffba1c08b00d8cd56f2b964f9e227bd571f9e8c0c8beff1352b320c325d4136b7f606af9bc9f437d79d72806e74361574ab6be1a2f606c371a43bab0bc453412dd2388f8b1e796e0095ca37028ee88bc8e6e246ea8cd64871a3852b169d56393e1034ddacd61d38f929a114658f91a4ebbc43c68156020f5959a6972e43d0fdff3bbe8ee505b18ae7bd94a1b7cc3f2fc6e0847b78758bf6b8bc63dbceda262479e41ac07e9763831e0bcdc4c989831b7ae4e5274604f"),
	dp: &hex!("07f0b21da8fec53a097929c0f41a07efc62e3bc6d967ee77cb4eb8a476d713aae7f380fea6f8a3c432c1b3110b07e3651b4a959e364b8fa73eb3a4e12c27bc79b60c3fac8a154e1919c2270294fc50b87b827c3e1a61f2f38d5c6db18b628edc32ff40c375c9a844853dda5294a8c30cacbccb00c6b989de06bb0f839775fc90a0e3ad54ce56108c3141ed7670ba8ac22abc4bdd9948aac69b1cfeef184b7f88aa38e78ffb77630cf72ce464910a5720b200a257143d4bb256c71269bc74e9846f4dbc9a15f257bb34f13833b05ed454a84ba245917d631279ff39fbc4e82eb12ef93bd09015bbe735104c7745d875b97e9ea07e7c4fee26c2a8fc004a77013d"),
	dq: &hex!("744d10ccd4f80d4c0082836a3fe82d68e2075c08d172020add362e85605729d498227293b8a6f878332b636415852ae5419691e388a990219b92649134a945c0fdcc38443b49315dffe6b784cb7401ade153e0a949dd213af199bada751888f5a627c96a3975887f52f0315cfe1c89cc4028f6fe4c28667e780861ba4c3f5172aeac89eac841d2d8f259d2d7e57fa929b64c1ab721a0c1cdded74a28d89e694469f25acf02e51ad2cc1cfd418358f316daa3bf2eee4be2d192597e8ff1d5892b59a9bd44133f674735cd7eeb20ada2881cb7a3730acc94f39c1d0bb908f0191a4d3d7188badcb2d7af25a2cab86c9d071a49780241a53f995d837edde71058e3"),
	qinv: &hex!("5b309df74d926faceb6209b3bd3a4fa898beece06af50d7ea006beeabdd8a8bd9413e9e23485aa498f43957092e08baf344d004073771693aedb1d9c32bcde8bbd661956e31197f46e5097688f086bf3ba5f5dfe48934340b8b8962720aa5ef226464f56a85034c0e8843b3eddbae258de4e96d0990360533c245efe8939fabcf6f8aa276e94834794f46bf2dd05ceaf627b9d5f239c8e09ccb88b52a9552b1c963e7160344e72e38afce6b6f6689c0d68c0943f5862ae49488397b16d43d60334de995241ff6f59c1ece5cbee8062dd340a63eb9a4a59f458d543796895310c6a589a8efb84e457df0d5c357a0befe4873ae67ee768fa4760f9126b9b93d7a0"),
};
