// Generated by scripts/bessel_poles.py, do not edit.

/// Highest prototype order covered by [`BESSEL_POLES`]
pub const BESSEL_MAX_ORDER: usize = 25;

/// Phase normalized analog Bessel prototype poles `[re, im]`
///
/// Order `n` occupies `n` entries starting at `n*(n - 1)/2`.
pub(crate) const BESSEL_POLES: [[f64; 2]; 325] = [
    // 1
    [-1.0, 0.0],
    // 2
    [-0.8660254037844386, 0.5],
    [-0.8660254037844386, -0.5],
    // 3
    [-0.7456403858480767, 0.7113666249728353],
    [-0.9416000265332067, 0.0],
    [-0.7456403858480767, -0.7113666249728353],
    // 4
    [-0.6572111716718829, 0.8301614350048734],
    [-0.904758796788245, 0.27091873300387465],
    [-0.904758796788245, -0.27091873300387465],
    [-0.6572111716718829, -0.8301614350048734],
    // 5
    [-0.5905759446119192, 0.907206756457455],
    [-0.8515536193688396, 0.4427174639443327],
    [-0.9264420773877602, 0.0],
    [-0.8515536193688396, -0.4427174639443327],
    [-0.5905759446119192, -0.907206756457455],
    // 6
    [-0.5385526816693109, 0.9616876881954277],
    [-0.7996541858328289, 0.5621717346937318],
    [-0.9093906830472271, 0.1856964396793047],
    [-0.9093906830472271, -0.1856964396793047],
    [-0.7996541858328289, -0.5621717346937318],
    [-0.5385526816693109, -0.9616876881954277],
    // 7
    [-0.4966917256672317, 1.0025085084544203],
    [-0.7527355434093215, 0.650469630552255],
    [-0.8800029341523374, 0.32166527623077396],
    [-0.919487155649029, 0.0],
    [-0.8800029341523374, -0.32166527623077396],
    [-0.7527355434093215, -0.650469630552255],
    [-0.4966917256672317, -1.0025085084544203],
    // 8
    [-0.4621740412532122, 1.034388681126901],
    [-0.71113818084854, 0.7186517314108402],
    [-0.8473250802359334, 0.4259017538272935],
    [-0.909683154665291, 0.1412437976671423],
    [-0.909683154665291, -0.1412437976671423],
    [-0.8473250802359334, -0.4259017538272935],
    [-0.71113818084854, -0.7186517314108402],
    [-0.4621740412532122, -1.034388681126901],
    // 9
    [-0.4331415561553619, 1.0600736701359297],
    [-0.6743622686854762, 0.7730546212691184],
    [-0.8148021112269013, 0.50858156896315],
    [-0.8911217017079759, 0.25265809345821644],
    [-0.9154957797499038, 0.0],
    [-0.8911217017079759, -0.25265809345821644],
    [-0.8148021112269013, -0.50858156896315],
    [-0.6743622686854762, -0.7730546212691184],
    [-0.4331415561553619, -1.0600736701359297],
    // 10
    [-0.40832207328688613, 1.0812748428191246],
    [-0.6417513866988316, 0.8175836167191017],
    [-0.7837694413101441, 0.5759147538499947],
    [-0.8688459641284765, 0.343000823376631],
    [-0.9091347320900502, 0.11395831373355111],
    [-0.9091347320900502, -0.11395831373355111],
    [-0.8688459641284765, -0.343000823376631],
    [-0.7837694413101441, -0.5759147538499947],
    [-0.6417513866988316, -0.8175836167191017],
    [-0.40832207328688613, -1.0812748428191246],
    // 11
    [-0.3868149510055091, 1.099117466763121],
    [-0.6126871554915194, 0.8547813893314765],
    [-0.7546938934722303, 0.6319150050721847],
    [-0.8453044014712963, 0.41786969178012484],
    [-0.8963656705721166, 0.20804803750710318],
    [-0.9129067244518982, 0.0],
    [-0.8963656705721166, -0.20804803750710318],
    [-0.8453044014712963, -0.41786969178012484],
    [-0.7546938934722303, -0.6319150050721847],
    [-0.6126871554915194, -0.8547813893314765],
    [-0.3868149510055091, -1.099117466763121],
    // 12
    [-0.3679640085526313, 1.1143735756415463],
    [-0.5866369321861478, 0.8863772751320727],
    [-0.727668161539516, 0.6792961178764694],
    [-0.8217296939939077, 0.48102121151006766],
    [-0.8802534342016827, 0.28717795035242266],
    [-0.9084478234140683, 0.09550636521345039],
    [-0.9084478234140683, -0.09550636521345039],
    [-0.8802534342016827, -0.28717795035242266],
    [-0.8217296939939077, -0.48102121151006766],
    [-0.727668161539516, -0.6792961178764694],
    [-0.5866369321861478, -0.8863772751320727],
    [-0.3679640085526313, -1.1143735756415463],
    // 13
    [-0.3512792323389822, 1.1275915483177057],
    [-0.5631559842430199, 0.9135900338325109],
    [-0.7026234675721276, 0.7199611890171305],
    [-0.7987460692470972, 0.5350752120696802],
    [-0.8625094198260549, 0.3547413731172989],
    [-0.8991314665475196, 0.17683429561610436],
    [-0.9110914665984183, 0.0],
    [-0.8991314665475196, -0.17683429561610436],
    [-0.8625094198260549, -0.3547413731172989],
    [-0.7987460692470972, -0.5350752120696802],
    [-0.7026234675721276, -0.7199611890171305],
    [-0.5631559842430199, -0.9135900338325109],
    [-0.3512792323389822, -1.1275915483177057],
    // 14
    [-0.33638682249020374, 1.13917229783986],
    [-0.5418766775112297, 0.937304368351692],
    [-0.6794256425119233, 0.7552857305042033],
    [-0.7766591387063624, 0.5819170677377609],
    [-0.8441199160909851, 0.41316538251026924],
    [-0.8869506674916445, 0.2470079178765333],
    [-0.9077932138396487, 0.0821963994194015],
    [-0.9077932138396487, -0.0821963994194015],
    [-0.8869506674916445, -0.2470079178765333],
    [-0.8441199160909851, -0.41316538251026924],
    [-0.7766591387063624, -0.5819170677377609],
    [-0.6794256425119233, -0.7552857305042033],
    [-0.5418766775112297, -0.937304368351692],
    [-0.33638682249020374, -1.13917229783986],
    // 15
    [-0.3229963059766444, 1.1494161545836294],
    [-0.5224954069658331, 0.9581787261092527],
    [-0.6579196593110999, 0.7862895503722516],
    [-0.7556027168970728, 0.6229396358758267],
    [-0.8256631452587146, 0.46423487527343255],
    [-0.8731264620834985, 0.30823524705642674],
    [-0.9006981694176979, 0.15376811972784393],
    [-0.9097482363849064, 0.0],
    [-0.9006981694176979, -0.15376811972784393],
    [-0.8731264620834985, -0.30823524705642674],
    [-0.8256631452587146, -0.46423487527343255],
    [-0.7556027168970728, -0.6229396358758267],
    [-0.6579196593110999, -0.7862895503722516],
    [-0.5224954069658331, -0.9581787261092527],
    [-0.3229963059766444, -1.1494161545836294],
    // 16
    [-0.3108782755645388, 1.1585528411993304],
    [-0.5047606444424767, 0.976713747779909],
    [-0.6379502514039067, 0.8137453537108762],
    [-0.7356166304713116, 0.6591950877860394],
    [-0.8074790293236004, 0.50929337511718],
    [-0.858426423152133, 0.36216972718020657],
    [-0.8911723070323647, 0.21670896599005765],
    [-0.9072099595087001, 0.07214211304111733],
    [-0.9072099595087001, -0.07214211304111733],
    [-0.8911723070323647, -0.21670896599005765],
    [-0.858426423152133, -0.36216972718020657],
    [-0.8074790293236004, -0.50929337511718],
    [-0.7356166304713116, -0.6591950877860394],
    [-0.6379502514039067, -0.8137453537108762],
    [-0.5047606444424767, -0.976713747779909],
    [-0.3108782755645388, -1.1585528411993304],
    // 17
    [-0.2998489459990082, 1.166761272925669],
    [-0.4884629337672704, 0.9932971956316782],
    [-0.6193710717342145, 0.8382497252826993],
    [-0.7166893842372349, 0.6914936286393609],
    [-0.7897644147799708, 0.5493724405281089],
    [-0.8433414495836129, 0.41007592829100215],
    [-0.8801100704438627, 0.2725347156478804],
    [-0.9016273850787286, 0.13602679951730245],
    [-0.9087141161336397, 0.0],
    [-0.9016273850787286, -0.13602679951730245],
    [-0.8801100704438627, -0.2725347156478804],
    [-0.8433414495836129, -0.41007592829100215],
    [-0.7897644147799708, -0.5493724405281089],
    [-0.7166893842372349, -0.6914936286393609],
    [-0.6193710717342145, -0.8382497252826993],
    [-0.4884629337672704, -0.9932971956316782],
    [-0.2998489459990082, -1.166761272925669],
    // 18
    [-0.28975920298804897, 1.174183010600059],
    [-0.47342680699161516, 1.008234300314801],
    [-0.6020482668090644, 0.8602708961893665],
    [-0.6987821445005273, 0.720469650972663],
    [-0.7726285030739559, 0.585277816208664],
    [-0.8281885016242837, 0.4529385697815917],
    [-0.868109550362883, 0.32242049251632576],
    [-0.8939764278132456, 0.19303746408947586],
    [-0.9067004324162775, 0.0642792410639307],
    [-0.9067004324162775, -0.0642792410639307],
    [-0.8939764278132456, -0.19303746408947586],
    [-0.868109550362883, -0.32242049251632576],
    [-0.8281885016242837, -0.4529385697815917],
    [-0.7726285030739559, -0.585277816208664],
    [-0.6987821445005273, -0.720469650972663],
    [-0.6020482668090644, -0.8602708961893665],
    [-0.47342680699161516, -1.008234300314801],
    [-0.28975920298804897, -1.174183010600059],
    // 19
    [-0.280486685143937, 1.1809316284532918],
    [-0.45950434497309883, 1.0217687769126713],
    [-0.5858613321217833, 0.8801817131014567],
    [-0.6818424412912442, 0.7466272357947761],
    [-0.7561260971541629, 0.6176483917970179],
    [-0.8131725551578197, 0.4915365035562459],
    [-0.8555768765618421, 0.36729258963998723],
    [-0.8849290585034385, 0.24425907575498182],
    [-0.902193763939066, 0.12195683818720265],
    [-0.9078934217899405, 0.0],
    [-0.902193763939066, -0.12195683818720265],
    [-0.8849290585034385, -0.24425907575498182],
    [-0.8555768765618421, -0.36729258963998723],
    [-0.8131725551578197, -0.4915365035562459],
    [-0.7561260971541629, -0.6176483917970179],
    [-0.6818424412912442, -0.7466272357947761],
    [-0.5858613321217833, -0.8801817131014567],
    [-0.45950434497309883, -1.0217687769126713],
    [-0.280486685143937, -1.1809316284532918],
    // 20
    [-0.2719299580251653, 1.187099379810886],
    [-0.44657006982051495, 1.0340977025608429],
    [-0.5707026806915714, 0.8982829066468255],
    [-0.6658120544829934, 0.7703721701100763],
    [-0.7402780309646769, 0.6469975237605229],
    [-0.7984251191290607, 0.5264942388817132],
    [-0.8427907479956671, 0.4078917326291934],
    [-0.8749560316673333, 0.2905559296567908],
    [-0.8959150941925769, 0.1740317175918705],
    [-0.9062570115576771, 0.05796178027784952],
    [-0.9062570115576771, -0.05796178027784952],
    [-0.8959150941925769, -0.1740317175918705],
    [-0.8749560316673333, -0.2905559296567908],
    [-0.8427907479956671, -0.4078917326291934],
    [-0.7984251191290607, -0.5264942388817132],
    [-0.7402780309646769, -0.6469975237605229],
    [-0.6658120544829934, -0.7703721701100763],
    [-0.5707026806915714, -0.8982829066468255],
    [-0.44657006982051495, -1.0340977025608429],
    [-0.2719299580251653, -1.187099379810886],
    // 21
    [-0.2640041595834031, 1.1927620319480525],
    [-0.43451689068152716, 1.0453822558569865],
    [-0.5564766488918562, 0.9148198405846724],
    [-0.6506315378609463, 0.7920349342629491],
    [-0.7250839687106613, 0.6737426063024382],
    [-0.7840287980408341, 0.5583186348022855],
    [-0.8299435470674444, 0.44481777394079564],
    [-0.8643915813643205, 0.3326258512522187],
    [-0.888380810666445, 0.22130692150843503],
    [-0.9025428073192696, 0.11052525727898564],
    [-0.9072262653142957, 0.0],
    [-0.9025428073192696, -0.11052525727898564],
    [-0.888380810666445, -0.22130692150843503],
    [-0.8643915813643205, -0.3326258512522187],
    [-0.8299435470674444, -0.44481777394079564],
    [-0.7840287980408341, -0.5583186348022855],
    [-0.7250839687106613, -0.6737426063024382],
    [-0.6506315378609463, -0.7920349342629491],
    [-0.5564766488918562, -0.9148198405846724],
    [-0.43451689068152716, -1.0453822558569865],
    [-0.2640041595834031, -1.1927620319480525],
    // 22
    [-0.2566376987939318, 1.197982433555213],
    [-0.42325287456426286, 1.0557556052275459],
    [-0.5430983056306303, 0.9299947824439873],
    [-0.6362427683267827, 0.8118875040246347],
    [-0.7105305456418786, 0.6982266265924524],
    [-0.7700332930556817, 0.5874255426351154],
    [-0.8171682088462721, 0.4785619492202781],
    [-0.8534754036851687, 0.371038931948232],
    [-0.8799661455640176, 0.2644363039201535],
    [-0.8972983138153531, 0.15843519122898655],
    [-0.9058702269930873, 0.05277490828999905],
    [-0.9058702269930873, -0.05277490828999905],
    [-0.8972983138153531, -0.15843519122898655],
    [-0.8799661455640176, -0.2644363039201535],
    [-0.8534754036851687, -0.371038931948232],
    [-0.8171682088462721, -0.4785619492202781],
    [-0.7700332930556817, -0.5874255426351154],
    [-0.7105305456418786, -0.6982266265924524],
    [-0.6362427683267827, -0.8118875040246347],
    [-0.5430983056306303, -0.9299947824439873],
    [-0.42325287456426286, -1.0557556052275459],
    [-0.2566376987939318, -1.197982433555213],
    // 23
    [-0.2497697202208956, 1.2028131878706978],
    [-0.4126986617510149, 1.0653287944755137],
    [-0.5304922463810192, 0.94397603640183],
    [-0.6225903228771342, 0.830155830281298],
    [-0.6965966033912705, 0.7207341374753047],
    [-0.756466014682988, 0.6141594859476032],
    [-0.8045561642053176, 0.5095305912227258],
    [-0.8423805948021127, 0.4062657948237603],
    [-0.8709469395587416, 0.3039581993950042],
    [-0.8909283242471251, 0.20230246993812234],
    [-0.9027564979912505, 0.1010534335314045],
    [-0.9066732476324988, 0.0],
    [-0.9027564979912505, -0.1010534335314045],
    [-0.8909283242471251, -0.20230246993812234],
    [-0.8709469395587416, -0.3039581993950042],
    [-0.8423805948021127, -0.4062657948237603],
    [-0.8045561642053176, -0.5095305912227258],
    [-0.756466014682988, -0.6141594859476032],
    [-0.6965966033912705, -0.7207341374753047],
    [-0.6225903228771342, -0.830155830281298],
    [-0.5304922463810192, -0.94397603640183],
    [-0.4126986617510149, -1.0653287944755137],
    [-0.2497697202208956, -1.2028131878706978],
    // 24
    [-0.24334813375248696, 1.2072986837319726],
    [-0.4027853855197518, 1.0741951965186747],
    [-0.5185914574820317, 0.9569048385259055],
    [-0.6096221567378336, 0.8470292433077202],
    [-0.6832565803536521, 0.7415032695091651],
    [-0.7433392285088529, 0.6388084216222568],
    [-0.7921695462343492, 0.5380628490968017],
    [-0.831232646681324, 0.43869859335973055],
    [-0.8615278304016354, 0.34032021126186246],
    [-0.8837358034555707, 0.2426335234401383],
    [-0.8983105104397873, 0.14540561338736102],
    [-0.9055312363372774, 0.0484400665404787],
    [-0.9055312363372774, -0.0484400665404787],
    [-0.8983105104397873, -0.14540561338736102],
    [-0.8837358034555707, -0.2426335234401383],
    [-0.8615278304016354, -0.34032021126186246],
    [-0.831232646681324, -0.43869859335973055],
    [-0.7921695462343492, -0.5380628490968017],
    [-0.7433392285088529, -0.6388084216222568],
    [-0.6832565803536521, -0.7415032695091651],
    [-0.6096221567378336, -0.8470292433077202],
    [-0.5185914574820317, -0.9569048385259055],
    [-0.4027853855197518, -1.0741951965186747],
    [-0.24334813375248696, -1.2072986837319726],
    // 25
    [-0.2373280669322029, 1.2114766583825654],
    [-0.393452987819108, 1.0824339271738317],
    [-0.5073362861078469, 0.9689006305344868],
    [-0.5972898661335557, 0.8626676330388029],
    [-0.6704827128029559, 0.760734885816784],
    [-0.7306549271849968, 0.6616149647357749],
    [-0.7800496278186497, 0.564444121034971],
    [-0.820122604393688, 0.46866685746569664],
    [-0.851861688655402, 0.3738977875907595],
    [-0.8759497989677858, 0.2798521321771409],
    [-0.8928551459883549, 0.18630689698043007],
    [-0.902883339022802, 0.09307713118510297],
    [-0.9062073871811709, 0.0],
    [-0.902883339022802, -0.09307713118510297],
    [-0.8928551459883549, -0.18630689698043007],
    [-0.8759497989677858, -0.2798521321771409],
    [-0.851861688655402, -0.3738977875907595],
    [-0.820122604393688, -0.46866685746569664],
    [-0.7800496278186497, -0.564444121034971],
    [-0.7306549271849968, -0.6616149647357749],
    [-0.6704827128029559, -0.760734885816784],
    [-0.5972898661335557, -0.8626676330388029],
    [-0.5073362861078469, -0.9689006305344868],
    [-0.393452987819108, -1.0824339271738317],
    [-0.2373280669322029, -1.2114766583825654],
];
