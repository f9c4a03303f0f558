//! Year table for 兩漢 (太初 reform, 四分 from 元和二年二月).

use super::RawYear::{self, Filled};

pub(crate) const START_YEAR: i32 = -205;

pub(crate) static HAN: &[RawYear] = &[
    Filled((-206, 11, 13), "十月丙戌 十一月丙辰 十二月乙酉 一月乙卯 二月甲申 三月甲寅 四月癸未 五月癸丑 六月壬午 七月壬子 八月辛巳 九月辛亥"),
    Filled((-205, 11, 2), "十月庚辰 十一月庚戌 十二月己卯 一月己酉 二月己卯 三月戊申 四月戊寅 五月丁未 六月丁丑 七月丙午 八月丙子 九月乙巳 後九月乙亥"),
    Filled((-204, 11, 20), "十月甲辰 十一月甲戌 十二月癸卯 一月癸酉 二月壬寅 三月壬申 四月辛丑 五月辛未 六月辛丑 七月庚午 八月庚子 九月己巳"),
    Filled((-203, 11, 10), "十月己亥 十一月戊辰 十二月戊戌 一月丁卯 二月丁酉 三月丙寅 四月丙申 五月乙丑 六月乙未 七月甲子 八月甲午 九月甲子"),
    Filled((-202, 10, 30), "十月癸巳 十一月癸亥 十二月壬辰 一月壬戌 二月辛卯 三月辛酉 四月庚寅 五月庚申 六月己丑 七月己未 八月戊子 九月戊午 後九月丁亥"),
    Filled((-201, 11, 18), "十月丁巳 十一月丙戌 十二月丙辰 一月丙戌 二月乙卯 三月乙酉 四月甲寅 五月甲申 六月癸丑 七月癸未 八月壬子 九月壬午"),
    Filled((-200, 11, 6), "十月辛亥 十一月辛巳 十二月庚戌 一月庚辰 二月己酉 三月己卯 四月己酉 五月戊寅 六月戊申 七月丁丑 八月丁未 九月丙子 後九月丙午"),
    Filled((-199, 11, 25), "十月乙亥 十一月乙巳 十二月甲戌 一月甲辰 二月癸酉 三月癸卯 四月壬申 五月壬寅 六月辛未 七月辛丑 八月辛未 九月庚子"),
    Filled((-198, 11, 15), "十月庚午 十一月己亥 十二月己巳 一月戊戌 二月戊辰 三月丁酉 四月丁卯 五月丙申 六月丙寅 七月乙未 八月乙丑 九月甲午"),
    Filled((-197, 11, 4), "十月甲子 十一月癸巳 十二月癸亥 一月癸巳 二月壬戌 三月壬辰 四月辛酉 五月辛卯 六月庚申 七月庚寅 八月己未 九月己丑 後九月戊午"),
    Filled((-196, 11, 22), "十月戊子 十一月丁巳 十二月丁亥 一月丙辰 二月丙戌 三月丙辰 四月乙酉 五月乙卯 六月甲申 七月甲寅 八月癸未 九月癸丑"),
    Filled((-195, 11, 11), "十月壬午 十一月壬子 十二月辛巳 一月辛亥 二月庚辰 三月庚戌 四月己卯 五月己酉 六月戊寅 七月戊申 八月戊寅 九月丁未"),
    Filled((-194, 11, 1), "十月丁丑 十一月丙午 十二月丙子 一月乙巳 二月乙亥 三月甲辰 四月甲戌 五月癸卯 六月癸酉 七月壬寅 八月壬申 九月辛丑 後九月辛未"),
    Filled((-193, 11, 20), "十月辛丑 十一月庚午 十二月庚子 一月己巳 二月己亥 三月戊辰 四月戊戌 五月丁卯 六月丁酉 七月丙寅 八月丙申 九月乙丑"),
    Filled((-192, 11, 8), "十月乙未 十一月甲子 十二月甲午 一月癸亥 二月癸巳 三月癸亥 四月壬辰 五月壬戌 六月辛卯 七月辛酉 八月庚寅 九月庚申"),
    Filled((-191, 10, 28), "十月己丑 十一月己未 十二月戊子 一月戊午 二月丁亥 三月丁巳 四月丙戌 五月丙辰 六月乙酉 七月乙卯 八月乙酉 九月甲寅 後九月甲申"),
    Filled((-190, 11, 16), "十月癸丑 十一月癸未 十二月壬子 一月壬午 二月辛亥 三月辛巳 四月庚戌 五月庚辰 六月己酉 七月己卯 八月戊申 九月戊寅"),
    Filled((-189, 11, 6), "十月戊申 十一月丁丑 十二月丁未 一月丙子 二月丙午 三月乙亥 四月乙巳 五月甲戌 六月甲辰 七月癸酉 八月癸卯 九月壬申 後九月壬寅"),
    Filled((-188, 11, 23), "十月辛未 十一月辛丑 十二月庚午 一月庚子 二月庚午 三月己亥 四月己巳 五月戊戌 六月戊辰 七月丁酉 八月丁卯 九月丙申"),
    Filled((-187, 11, 13), "十月丙寅 十一月乙未 十二月乙丑 一月甲午 二月甲子 三月癸巳 四月癸亥 五月癸巳 六月壬戌 七月壬辰 八月辛酉 九月辛卯"),
    Filled((-186, 11, 2), "十月庚申 十一月庚寅 十二月己未 一月己丑 二月戊午 三月戊子 四月丁巳 五月丁亥 六月丙辰 七月丙戌 八月乙卯 九月乙酉 後九月乙卯"),
    Filled((-185, 11, 21), "十月甲申 十一月甲寅 十二月癸未 一月癸丑 二月壬午 三月壬子 四月辛巳 五月辛亥 六月庚辰 七月庚戌 八月己卯 九月己酉"),
    Filled((-184, 11, 9), "十月戊寅 十一月戊申 十二月丁丑 一月丁未 二月丁丑 三月丙午 四月丙子 五月乙巳 六月乙亥 七月甲辰 八月甲戌 九月癸卯"),
    Filled((-183, 10, 30), "十月癸酉 十一月壬寅 十二月壬申 一月辛丑 二月辛未 三月庚子 四月庚午 五月庚子 六月己巳 七月己亥 八月戊辰 九月戊戌 後九月丁卯"),
    Filled((-182, 11, 18), "十月丁酉 十一月丙寅 十二月丙申 一月乙丑 二月乙未 三月甲子 四月甲午 五月癸亥 六月癸巳 七月壬戌 八月壬辰 九月壬戌"),
    Filled((-181, 11, 7), "十月辛卯 十一月辛酉 十二月庚寅 一月庚申 二月己丑 三月己未 四月戊子 五月戊午 六月丁亥 七月丁巳 八月丙戌 九月丙辰 後九月乙酉"),
    Filled((-180, 11, 25), "十月乙卯 十一月乙酉 十二月甲寅 一月甲申 二月癸丑 三月癸未 四月壬子 五月壬午 六月辛亥 七月辛巳 八月庚戌 九月庚辰"),
    Filled((-179, 11, 14), "十月己酉 十一月己卯 十二月戊申 一月戊寅 二月丁未 三月丁丑 四月丁未 五月丙子 六月丙午 七月乙亥 八月乙巳 九月甲戌"),
    Filled((-178, 11, 4), "十月甲辰 十一月癸酉 十二月癸卯 一月壬申 二月壬寅 三月辛未 四月辛丑 五月庚午 六月庚子 七月己巳 八月己亥 九月己巳 後九月戊戌"),
    Filled((-177, 11, 23), "十月戊辰 十一月丁酉 十二月丁卯 一月丙申 二月丙寅 三月乙未 四月乙丑 五月甲午 六月甲子 七月癸巳 八月癸亥 九月壬辰"),
    Filled((-176, 11, 11), "十月壬戌 十一月壬辰 十二月辛酉 一月辛卯 二月庚申 三月庚寅 四月己未 五月己丑 六月戊午 七月戊子 八月丁巳 九月丁亥"),
    Filled((-175, 10, 31), "十月丙辰 十一月丙戌 十二月乙卯 一月乙酉 二月甲寅 三月甲申 四月甲寅 五月癸未 六月癸丑 七月壬午 八月壬子 九月辛巳 後九月辛亥"),
    Filled((-174, 11, 19), "十月庚辰 十一月庚戌 十二月己卯 一月己酉 二月戊寅 三月戊申 四月丁丑 五月丁未 六月丙子 七月丙午 八月丙子 九月乙巳"),
    Filled((-173, 11, 9), "十月乙亥 十一月甲辰 十二月甲戌 一月癸卯 二月癸酉 三月壬寅 四月壬申 五月辛丑 六月辛未 七月庚子 八月庚午 九月己亥"),
    Filled((-172, 10, 28), "十月己巳 十一月己亥 十二月戊辰 一月戊戌 二月丁卯 三月丁酉 四月丙寅 五月丙申 六月乙丑 七月乙未 八月甲子 九月甲午 後九月癸亥"),
    Filled((-171, 11, 16), "十月癸巳 十一月壬戌 十二月壬辰 一月辛酉 二月辛卯 三月辛酉 四月庚寅 五月庚申 六月己丑 七月己未 八月戊子 九月戊午"),
    Filled((-170, 11, 5), "十月丁亥 十一月丁巳 十二月丙戌 一月丙辰 二月乙酉 三月乙卯 四月甲申 五月甲寅 六月甲申 七月癸丑 八月癸未 九月壬子 後九月壬午"),
    Filled((-169, 11, 24), "十月辛亥 十一月辛巳 十二月庚戌 一月庚辰 二月己酉 三月己卯 四月戊申 五月戊寅 六月丁未 七月丁丑 八月丙午 九月丙子"),
    Filled((-168, 11, 13), "十月丙午 十一月乙亥 十二月乙巳 一月甲戌 二月甲辰 三月癸酉 四月癸卯 五月壬申 六月壬寅 七月辛未 八月辛丑 九月庚午"),
    Filled((-167, 11, 2), "十月庚子 十一月己巳 十二月己亥 一月戊辰 二月戊戌 三月戊辰 四月丁酉 五月丁卯 六月丙申 七月丙寅 八月乙未 九月乙丑 後九月甲午"),
    Filled((-166, 11, 21), "十月甲子 十一月癸巳 十二月癸亥 一月壬辰 二月壬戌 三月辛卯 四月辛酉 五月辛卯 六月庚申 七月庚寅 八月己未 九月己丑"),
    Filled((-165, 11, 10), "十月戊午 十一月戊子 十二月丁巳 一月丁亥 二月丙辰 三月丙戌 四月乙卯 五月乙酉 六月甲寅 七月甲申 八月癸丑 九月癸未"),
    Filled((-164, 10, 30), "十月癸丑 十一月壬午 十二月壬子 一月辛巳 二月辛亥 三月庚辰 四月庚戌 五月己卯 六月己酉 七月戊寅 八月戊申 九月丁丑 後九月丁未"),
    Filled((-163, 11, 17), "十月丙子 十一月丙午 十二月丙子 一月乙巳 二月乙亥 三月甲辰 四月甲戌 五月癸卯 六月癸酉 七月壬寅 八月壬申 九月辛丑"),
    Filled((-162, 11, 7), "十月辛未 十一月庚子 十二月庚午 一月己亥 二月己巳 三月戊戌 四月戊辰 五月戊戌 六月丁卯 七月丁酉 八月丙寅 九月丙申 後九月乙丑"),
    Filled((-161, 11, 26), "十月乙未 十一月甲子 十二月甲午 一月癸亥 二月癸巳 三月壬戌 四月壬辰 五月辛酉 六月辛卯 七月庚申 八月庚寅 九月庚申"),
    Filled((-160, 11, 14), "十月己丑 十一月己未 十二月戊子 一月戊午 二月丁亥 三月丁巳 四月丙戌 五月丙辰 六月乙酉 七月乙卯 八月甲申 九月甲寅"),
    Filled((-159, 11, 3), "十月癸未 十一月癸丑 十二月癸未 一月壬子 二月壬午 三月辛亥 四月辛巳 五月庚戌 六月庚辰 七月己酉 八月己卯 九月戊申 後九月戊寅"),
    Filled((-158, 11, 22), "十月丁未 十一月丁丑 十二月丙午 一月丙子 二月乙巳 三月乙亥 四月乙巳 五月甲戌 六月甲辰 七月癸酉 八月癸卯 九月壬申"),
    Filled((-157, 11, 12), "十月壬寅 十一月辛未 十二月辛丑 一月庚午 二月庚子 三月己巳 四月己亥 五月戊辰 六月戊戌 七月戊辰 八月丁酉 九月丁卯"),
    Filled((-156, 10, 31), "十月丙申 十一月丙寅 十二月乙未 一月乙丑 二月甲午 三月甲子 四月癸巳 五月癸亥 六月壬辰 七月壬戌 八月辛卯 九月辛酉 後九月庚寅"),
    Filled((-155, 11, 19), "十月庚申 十一月庚寅 十二月己未 一月己丑 二月戊午 三月戊子 四月丁巳 五月丁亥 六月丙辰 七月丙戌 八月乙卯 九月乙酉"),
    Filled((-154, 11, 8), "十月甲寅 十一月甲申 十二月癸丑 一月癸未 二月壬子 三月壬午 四月壬子 五月辛巳 六月辛亥 七月庚辰 八月庚戌 九月己卯"),
    Filled((-153, 10, 29), "十月己酉 十一月戊寅 十二月戊申 一月丁丑 二月丁未 三月丙子 四月丙午 五月乙亥 六月乙巳 七月乙亥 八月甲辰 九月甲戌 後九月癸卯"),
    Filled((-152, 11, 16), "十月癸酉 十一月壬寅 十二月壬申 一月辛丑 二月辛未 三月庚子 四月庚午 五月己亥 六月己巳 七月戊戌 八月戊辰 九月丁酉"),
    Filled((-151, 11, 5), "十月丁卯 十一月丁酉 十二月丙寅 一月丙申 二月乙丑 三月乙未 四月甲子 五月甲午 六月癸亥 七月癸巳 八月壬戌 九月壬辰 後九月辛酉"),
    Filled((-150, 11, 24), "十月辛卯 十一月庚申 十二月庚寅 一月庚申 二月己丑 三月己未 四月戊子 五月戊午 六月丁亥 七月丁巳 八月丙戌 九月丙辰"),
    Filled((-149, 11, 13), "十月乙酉 十一月乙卯 十二月甲申 一月甲寅 二月癸未 三月癸丑 四月壬午 五月壬子 六月壬午 七月辛亥 八月辛巳 九月庚戌"),
    Filled((-148, 11, 2), "十月庚辰 十一月己酉 十二月己卯 一月戊申 二月戊寅 三月丁未 四月丁丑 五月丙午 六月丙子 七月乙巳 八月乙亥 九月甲辰 後九月甲戌"),
    Filled((-147, 11, 21), "十月甲辰 十一月癸酉 十二月癸卯 一月壬申 二月壬寅 三月辛未 四月辛丑 五月庚午 六月庚子 七月己巳 八月己亥 九月戊辰"),
    Filled((-146, 11, 10), "十月戊戌 十一月丁卯 十二月丁酉 一月丁卯 二月丙申 三月丙寅 四月乙未 五月乙丑 六月甲午 七月甲子 八月癸巳 九月癸亥"),
    Filled((-145, 10, 30), "十月壬辰 十一月壬戌 十二月辛卯 一月辛酉 二月庚寅 三月庚申 四月己丑 五月己未 六月己丑 七月戊午 八月戊子 九月丁巳 後九月丁亥"),
    Filled((-144, 11, 17), "十月丙辰 十一月丙戌 十二月乙卯 一月乙酉 二月甲寅 三月甲申 四月癸丑 五月癸未 六月壬子 七月壬午 八月壬子 九月辛巳"),
    Filled((-143, 11, 7), "十月辛亥 十一月庚辰 十二月庚戌 一月己卯 二月己酉 三月戊寅 四月戊申 五月丁丑 六月丁未 七月丙子 八月丙午 九月乙亥 後九月乙巳"),
    Filled((-142, 11, 25), "十月甲戌 十一月甲辰 十二月甲戌 一月癸卯 二月癸酉 三月壬寅 四月壬申 五月辛丑 六月辛未 七月庚子 八月庚午 九月己亥"),
    Filled((-141, 11, 15), "十月己巳 十一月戊戌 十二月戊辰 一月丁酉 二月丁卯 三月丙申 四月丙寅 五月丙申 六月乙丑 七月乙未 八月甲子 九月甲午"),
    Filled((-140, 11, 3), "十月癸亥 十一月癸巳 十二月壬戌 一月壬辰 二月辛酉 三月辛卯 四月庚申 五月庚寅 六月己未 七月己丑 八月己未 九月戊子 後九月戊午"),
    Filled((-139, 11, 22), "十月丁亥 十一月丁巳 十二月丙戌 一月丙辰 二月乙酉 三月乙卯 四月甲申 五月甲寅 六月癸未 七月癸丑 八月壬午 九月壬子"),
    Filled((-138, 11, 11), "十月辛巳 十一月辛亥 十二月辛巳 一月庚戌 二月庚辰 三月己酉 四月己卯 五月戊申 六月戊寅 七月丁未 八月丁丑 九月丙午"),
    Filled((-137, 11, 1), "十月丙子 十一月乙巳 十二月乙亥 一月甲辰 二月甲戌 三月甲辰 四月癸酉 五月癸卯 六月壬申 七月壬寅 八月辛未 九月辛丑 後九月庚午"),
    Filled((-136, 11, 19), "十月庚子 十一月己巳 十二月己亥 一月戊辰 二月戊戌 三月丁卯 四月丁酉 五月丙寅 六月丙申 七月丙寅 八月乙未 九月乙丑"),
    Filled((-135, 11, 8), "十月甲午 十一月甲子 十二月癸巳 一月癸亥 二月壬辰 三月壬戌 四月辛卯 五月辛酉 六月庚寅 七月庚申 八月己丑 九月己未"),
    Filled((-134, 10, 28), "十月戊子 十一月戊午 十二月戊子 一月丁巳 二月丁亥 三月丙辰 四月丙戌 五月乙卯 六月乙酉 七月甲寅 八月甲申 九月癸丑 後九月癸未"),
    Filled((-133, 11, 16), "十月壬子 十一月壬午 十二月辛亥 一月辛巳 二月辛亥 三月庚辰 四月庚戌 五月己卯 六月己酉 七月戊寅 八月戊申 九月丁丑"),
    Filled((-132, 11, 5), "十月丁未 十一月丙子 十二月丙午 一月乙亥 二月乙巳 三月甲戌 四月甲辰 五月癸酉 六月癸卯 七月癸酉 八月壬寅 九月壬申 後九月辛丑"),
    Filled((-131, 11, 24), "十月辛未 十一月庚子 十二月庚午 一月己亥 二月己巳 三月戊戌 四月戊辰 五月丁酉 六月丁卯 七月丙申 八月丙寅 九月丙申"),
    Filled((-130, 11, 13), "十月乙丑 十一月乙未 十二月甲子 一月甲午 二月癸亥 三月癸巳 四月壬戌 五月壬辰 六月辛酉 七月辛卯 八月庚申 九月庚寅"),
    Filled((-129, 11, 2), "十月己未 十一月己丑 十二月戊午 一月戊子 二月戊午 三月丁亥 四月丁巳 五月丙戌 六月丙辰 七月乙酉 八月乙卯 九月甲申 後九月甲寅"),
    Filled((-128, 11, 20), "十月癸未 十一月癸丑 十二月壬午 一月壬子 二月辛巳 三月辛亥 四月庚辰 五月庚戌 六月庚辰 七月己酉 八月己卯 九月戊申"),
    Filled((-127, 11, 10), "十月戊寅 十一月丁未 十二月丁丑 一月丙午 二月丙子 三月乙巳 四月乙亥 五月甲辰 六月甲戌 七月癸卯 八月癸酉 九月癸卯"),
    Filled((-126, 10, 30), "十月壬申 十一月壬寅 十二月辛未 一月辛丑 二月庚午 三月庚子 四月己巳 五月己亥 六月戊辰 七月戊戌 八月丁卯 九月丁酉 後九月丙寅"),
    Filled((-125, 11, 18), "十月丙申 十一月乙丑 十二月乙未 一月乙丑 二月甲午 三月甲子 四月癸巳 五月癸亥 六月壬辰 七月壬戌 八月辛卯 九月辛酉"),
    Filled((-124, 11, 6), "十月庚寅 十一月庚申 十二月己丑 一月己未 二月戊子 三月戊午 四月戊子 五月丁巳 六月丁亥 七月丙辰 八月丙戌 九月乙卯 後九月乙酉"),
    Filled((-123, 11, 25), "十月甲寅 十一月甲申 十二月癸丑 一月癸未 二月壬子 三月壬午 四月辛亥 五月辛巳 六月庚戌 七月庚辰 八月庚戌 九月己卯"),
    Filled((-122, 11, 15), "十月己酉 十一月戊寅 十二月戊申 一月丁丑 二月丁未 三月丙子 四月丙午 五月乙亥 六月乙巳 七月甲戌 八月甲辰 九月癸酉"),
    Filled((-121, 11, 4), "十月癸卯 十一月壬申 十二月壬寅 一月壬申 二月辛丑 三月辛未 四月庚子 五月庚午 六月己亥 七月己巳 八月戊戌 九月戊辰 後九月丁酉"),
    Filled((-120, 11, 22), "十月丁卯 十一月丙申 十二月丙寅 一月乙未 二月乙丑 三月乙未 四月甲子 五月甲午 六月癸亥 七月癸巳 八月壬戌 九月壬辰"),
    Filled((-119, 11, 11), "十月辛酉 十一月辛卯 十二月庚申 一月庚寅 二月己未 三月己丑 四月戊午 五月戊子 六月丁巳 七月丁亥 八月丁巳 九月丙戌"),
    Filled((-118, 11, 1), "十月丙辰 十一月乙酉 十二月乙卯 一月甲申 二月甲寅 三月癸未 四月癸丑 五月壬午 六月壬子 七月辛巳 八月辛亥 九月庚辰 後九月庚戌"),
    Filled((-117, 11, 20), "十月庚辰 十一月己酉 十二月己卯 一月戊申 二月戊寅 三月丁未 四月丁丑 五月丙午 六月丙子 七月乙巳 八月乙亥 九月甲辰"),
    Filled((-116, 11, 8), "十月甲戌 十一月癸卯 十二月癸酉 一月壬寅 二月壬申 三月壬寅 四月辛未 五月辛丑 六月庚午 七月庚子 八月己巳 九月己亥"),
    Filled((-115, 10, 28), "十月戊辰 十一月戊戌 十二月丁卯 一月丁酉 二月丙寅 三月丙申 四月乙丑 五月乙未 六月甲子 七月甲午 八月甲子 九月癸巳 後九月癸亥"),
    Filled((-114, 11, 16), "十月壬辰 十一月壬戌 十二月辛卯 一月辛酉 二月庚寅 三月庚申 四月己丑 五月己未 六月戊子 七月戊午 八月丁亥 九月丁巳"),
    Filled((-113, 11, 6), "十月丁亥 十一月丙辰 十二月丙戌 一月乙卯 二月乙酉 三月甲寅 四月甲申 五月癸丑 六月癸未 七月壬子 八月壬午 九月辛亥 後九月辛巳"),
    Filled((-112, 11, 23), "十月庚戌 十一月庚辰 十二月己酉 一月己卯 二月己酉 三月戊寅 四月戊申 五月丁丑 六月丁未 七月丙子 八月丙午 九月乙亥"),
    Filled((-111, 11, 13), "十月乙巳 十一月甲戌 十二月甲辰 一月癸酉 二月癸卯 三月壬申 四月壬寅 五月壬申 六月辛丑 七月辛未 八月庚子 九月庚午"),
    Filled((-110, 11, 2), "十月己亥 十一月己巳 十二月戊戌 一月戊辰 二月丁酉 三月丁卯 四月丙申 五月丙寅 六月乙未 七月乙丑 八月甲午 九月甲子 後九月甲午"),
    Filled((-109, 11, 21), "十月癸亥 十一月癸巳 十二月壬戌 一月壬辰 二月辛酉 三月辛卯 四月庚申 五月庚寅 六月己未 七月己丑 八月戊午 九月戊子"),
    Filled((-108, 11, 9), "十月丁巳 十一月丁亥 十二月丙辰 一月丙戌 二月丙辰 三月乙酉 四月乙卯 五月甲申 六月甲寅 七月癸未 八月癸丑 九月壬午"),
    Filled((-107, 10, 30), "十月壬子 十一月辛巳 十二月辛亥 一月庚辰 二月庚戌 三月己卯 四月己酉 五月己卯 六月戊申 七月戊寅 八月丁未 九月丁丑 後九月丙午"),
    Filled((-106, 11, 18), "十月丙子 十一月乙巳 十二月乙亥 一月甲辰 二月甲戌 三月癸卯 四月癸酉 五月壬寅 六月壬申 七月辛丑 八月辛未 九月辛丑"),
    Filled((-105, 11, 7), "十月庚午 十一月庚子 十二月己巳 一月己亥 二月戊辰 三月戊戌 四月丁卯 五月丁酉 六月丙寅 七月丙申 八月乙丑 九月乙未 後九月甲子"),
    Filled((-104, 11, 25), "十月甲午 十一月甲子 十二月癸巳 一月癸亥 二月壬辰 三月壬戌 四月辛卯 五月辛酉 六月庚寅 七月庚申 八月己丑 九月己未 後十月戊子 後十一月戊午 後十二月丁亥"),
    Filled((-102, 2, 11), "一月丁巳 二月丙戌 三月丙辰 四月丙戌 五月乙卯 六月乙酉 七月甲寅 八月甲申 九月癸丑 十月癸未 十一月壬子 十二月壬午"),
    Filled((-101, 1, 31), "一月辛亥 二月辛巳 三月庚戌 四月庚辰 五月己酉 六月己卯 七月戊申 閏七月戊寅 八月戊申 九月丁丑 十月丁未 十一月丙子 十二月丙午"),
    Filled((-100, 2, 19), "一月乙亥 二月乙巳 三月甲戌 四月甲辰 五月癸酉 六月癸卯 七月壬申 八月壬寅 九月辛未 十月辛丑 十一月辛未 十二月庚子"),
    Filled((-99, 2, 8), "一月庚午 二月己亥 三月己巳 四月戊戌 五月戊辰 六月丁酉 七月丁卯 八月丙申 九月丙寅 十月乙未 十一月乙丑 十二月甲午"),
    Filled((-98, 1, 28), "一月甲子 二月癸巳 三月癸亥 四月癸巳 閏四月壬戌 五月壬辰 六月辛酉 七月辛卯 八月庚申 九月庚寅 十月己未 十一月己丑 十二月戊午"),
    Filled((-97, 2, 16), "一月戊子 二月丁巳 三月丁亥 四月丙辰 五月丙戌 六月丙辰 七月乙酉 八月乙卯 九月甲申 十月甲寅 十一月癸未 十二月癸丑"),
    Filled((-96, 2, 5), "一月壬午 二月壬子 三月辛巳 四月辛亥 五月庚辰 六月庚戌 七月己卯 八月己酉 九月戊寅 十月戊申 十一月戊寅 十二月丁未 閏十二月丁丑"),
    Filled((-95, 2, 23), "一月丙午 二月丙子 三月乙巳 四月乙亥 五月甲辰 六月甲戌 七月癸卯 八月癸酉 九月壬寅 十月壬申 十一月辛丑 十二月辛未"),
    Filled((-94, 2, 12), "一月庚子 二月庚午 三月庚子 四月己巳 五月己亥 六月戊辰 七月戊戌 八月丁卯 九月丁酉 十月丙寅 十一月丙申 十二月乙丑"),
    Filled((-93, 2, 2), "一月乙未 二月甲子 三月甲午 四月癸亥 五月癸巳 六月癸亥 七月壬辰 八月壬戌 九月辛卯 閏九月辛酉 十月庚寅 十一月庚申 十二月己丑"),
    Filled((-92, 2, 21), "一月己未 二月戊子 三月戊午 四月丁亥 五月丁巳 六月丙戌 七月丙辰 八月乙酉 九月乙卯 十月乙酉 十一月甲寅 十二月甲申"),
    Filled((-91, 2, 9), "一月癸丑 二月癸未 三月壬子 四月壬午 五月辛亥 六月辛巳 七月庚戌 八月庚辰 九月己酉 十月己卯 十一月戊申 十二月戊寅"),
    Filled((-90, 1, 30), "一月戊申 二月丁丑 三月丁未 四月丙子 五月丙午 閏五月乙亥 六月乙巳 七月甲戌 八月甲辰 九月癸酉 十月癸卯 十一月壬申 十二月壬寅"),
    Filled((-89, 2, 17), "一月辛未 二月辛丑 三月庚午 四月庚子 五月庚午 六月己亥 七月己巳 八月戊戌 九月戊辰 十月丁酉 十一月丁卯 十二月丙申"),
    Filled((-88, 2, 7), "一月丙寅 二月乙未 三月乙丑 四月甲午 五月甲子 六月癸巳 七月癸亥 八月壬辰 九月壬戌 十月壬辰 十一月辛酉 十二月辛卯"),
    Filled((-87, 1, 26), "一月庚申 二月庚寅 閏二月己未 三月己丑 四月戊午 五月戊子 六月丁巳 七月丁亥 八月丙辰 九月丙戌 十月乙卯 十一月乙酉 十二月乙卯"),
    Filled((-86, 2, 14), "一月甲申 二月甲寅 三月癸未 四月癸丑 五月壬午 六月壬子 七月辛巳 八月辛亥 九月庚辰 十月庚戌 十一月己卯 十二月己酉"),
    Filled((-85, 2, 3), "一月戊寅 二月戊申 三月丁丑 四月丁未 五月丁丑 六月丙午 七月丙子 八月乙巳 九月乙亥 十月甲辰 閏十月甲戌 十一月癸卯 十二月癸酉"),
    Filled((-84, 2, 22), "一月壬寅 二月壬申 三月辛丑 四月辛未 五月庚子 六月庚午 七月庚子 八月己巳 九月己亥 十月戊辰 十一月戊戌 十二月丁卯"),
    Filled((-83, 2, 11), "一月丁酉 二月丙寅 三月丙申 四月乙丑 五月乙未 六月甲子 七月甲午 八月癸亥 九月癸巳 十月壬戌 十一月壬辰 十二月壬戌"),
    Filled((-82, 1, 31), "一月辛卯 二月辛酉 三月庚寅 四月庚申 五月己丑 六月己未 七月戊子 閏七月戊午 八月丁亥 九月丁巳 十月丙戌 十一月丙辰 十二月乙酉"),
    Filled((-81, 2, 19), "一月乙卯 二月甲申 三月甲寅 四月甲申 五月癸丑 六月癸未 七月壬子 八月壬午 九月辛亥 十月辛巳 十一月庚戌 十二月庚辰"),
    Filled((-80, 2, 8), "一月己酉 二月己卯 三月戊申 四月戊寅 五月丁未 六月丁丑 七月丁未 八月丙子 九月丙午 十月乙亥 十一月乙巳 十二月甲戌"),
    Filled((-79, 1, 28), "一月甲辰 二月癸酉 三月癸卯 四月壬申 閏四月壬寅 五月辛未 六月辛丑 七月庚午 八月庚子 九月己巳 十月己亥 十一月己巳 十二月戊戌"),
    Filled((-78, 2, 16), "一月戊辰 二月丁酉 三月丁卯 四月丙申 五月丙寅 六月乙未 七月乙丑 八月甲午 九月甲子 十月癸巳 十一月癸亥 十二月壬辰"),
    Filled((-77, 2, 5), "一月壬戌 二月壬辰 三月辛酉 四月辛卯 五月庚申 六月庚寅 七月己未 八月己丑 九月戊午 十月戊子 十一月丁巳 十二月丁亥 閏十二月丙辰"),
    Filled((-76, 2, 24), "一月丙戌 二月乙卯 三月乙酉 四月甲寅 五月甲申 六月甲寅 七月癸未 八月癸丑 九月壬午 十月壬子 十一月辛巳 十二月辛亥"),
    Filled((-75, 2, 12), "一月庚辰 二月庚戌 三月己卯 四月己酉 五月戊寅 六月戊申 七月丁丑 八月丁未 九月丙子 十月丙午 十一月丙子 十二月乙巳"),
    Filled((-74, 2, 2), "一月乙亥 二月甲辰 三月甲戌 四月癸卯 五月癸酉 六月壬寅 七月壬申 八月辛丑 九月辛未 閏九月庚子 十月庚午 十一月己亥 十二月己巳"),
    Filled((-73, 2, 21), "一月己亥 二月戊辰 三月戊戌 四月丁卯 五月丁酉 六月丙寅 七月丙申 八月乙丑 九月乙未 十月甲子 十一月甲午 十二月癸亥"),
    Filled((-72, 2, 10), "一月癸巳 二月壬戌 三月壬辰 四月辛酉 五月辛卯 六月辛酉 七月庚寅 八月庚申 九月己丑 十月己未 十一月戊子 十二月戊午"),
    Filled((-71, 1, 29), "一月丁亥 二月丁巳 三月丙戌 四月丙辰 五月乙酉 閏五月乙卯 六月甲申 七月甲寅 八月甲申 九月癸丑 十月癸未 十一月壬子 十二月壬午"),
    Filled((-70, 2, 17), "一月辛亥 二月辛巳 三月庚戌 四月庚辰 五月己酉 六月己卯 七月戊申 八月戊寅 九月丁未 十月丁丑 十一月丙午 十二月丙子"),
    Filled((-69, 2, 7), "一月丙午 二月乙亥 三月乙巳 四月甲戌 五月甲辰 六月癸酉 七月癸卯 八月壬申 九月壬寅 十月辛未 十一月辛丑 十二月庚午"),
    Filled((-68, 1, 27), "一月庚子 二月己巳 閏二月己亥 三月戊辰 四月戊戌 五月戊辰 六月丁酉 七月丁卯 八月丙申 九月丙寅 十月乙未 十一月乙丑 十二月甲午"),
    Filled((-67, 2, 14), "一月甲子 二月癸巳 三月癸亥 四月壬辰 五月壬戌 六月辛卯 七月辛酉 八月辛卯 九月庚申 十月庚寅 十一月己未 十二月己丑"),
    Filled((-66, 2, 3), "一月戊午 二月戊子 三月丁巳 四月丁亥 五月丙辰 六月丙戌 七月乙卯 八月乙酉 九月甲寅 十月甲申 閏十月癸丑 十一月癸未 十二月癸丑"),
    Filled((-65, 2, 22), "一月壬午 二月壬子 三月辛巳 四月辛亥 五月庚辰 六月庚戌 七月己卯 八月己酉 九月戊寅 十月戊申 十一月丁丑 十二月丁未"),
    Filled((-64, 2, 11), "一月丙子 二月丙午 三月丙子 四月乙巳 五月乙亥 六月甲辰 七月甲戌 八月癸卯 九月癸酉 十月壬寅 十一月壬申 十二月辛丑"),
    Filled((-63, 1, 31), "一月辛未 二月庚子 三月庚午 四月己亥 五月己巳 六月戊戌 七月戊辰 閏七月戊戌 八月丁卯 九月丁酉 十月丙寅 十一月丙申 十二月乙丑"),
    Filled((-62, 2, 19), "一月乙未 二月甲子 三月甲午 四月癸亥 五月癸巳 六月壬戌 七月壬辰 八月辛酉 九月辛卯 十月庚申 十一月庚寅 十二月庚申"),
    Filled((-61, 2, 8), "一月己丑 二月己未 三月戊子 四月戊午 五月丁亥 六月丁巳 七月丙戌 八月丙辰 九月乙酉 十月乙卯 十一月甲申 十二月甲寅"),
    Filled((-60, 1, 28), "一月癸未 二月癸丑 三月癸未 四月壬子 閏四月壬午 五月辛亥 六月辛巳 七月庚戌 八月庚辰 九月己酉 十月己卯 十一月戊申 十二月戊寅"),
    Filled((-59, 2, 15), "一月丁未 二月丁丑 三月丙午 四月丙子 五月乙巳 六月乙亥 七月乙巳 八月甲戌 九月甲辰 十月癸酉 十一月癸卯 十二月壬申"),
    Filled((-58, 2, 5), "一月壬寅 二月辛未 三月辛丑 四月庚午 五月庚子 六月己巳 七月己亥 八月戊辰 九月戊戌 十月戊辰 十一月丁酉 十二月丁卯 閏十二月丙申"),
    Filled((-57, 2, 24), "一月丙寅 二月乙未 三月乙丑 四月甲午 五月甲子 六月癸巳 七月癸亥 八月壬辰 九月壬戌 十月辛卯 十一月辛酉 十二月庚寅"),
    Filled((-56, 2, 13), "一月庚申 二月庚寅 三月己未 四月己丑 五月戊午 六月戊子 七月丁巳 八月丁亥 九月丙辰 十月丙戌 十一月乙卯 十二月乙酉"),
    Filled((-55, 2, 1), "一月甲寅 二月甲申 三月癸丑 四月癸未 五月壬子 六月壬午 七月壬子 八月辛巳 九月辛亥 閏九月庚辰 十月庚戌 十一月己卯 十二月己酉"),
    Filled((-54, 2, 20), "一月戊寅 二月戊申 三月丁丑 四月丁未 五月丙子 六月丙午 七月乙亥 八月乙巳 九月乙亥 十月甲辰 十一月甲戌 十二月癸卯"),
    Filled((-53, 2, 10), "一月癸酉 二月壬寅 三月壬申 四月辛丑 五月辛未 六月庚子 七月庚午 八月己亥 九月己巳 十月戊戌 十一月戊辰 十二月丁酉"),
    Filled((-52, 1, 30), "一月丁卯 二月丁酉 三月丙寅 四月丙申 五月乙丑 閏五月乙未 六月甲子 七月甲午 八月癸亥 九月癸巳 十月壬戌 十一月壬辰 十二月辛酉"),
    Filled((-51, 2, 17), "一月辛卯 二月庚申 三月庚寅 四月庚申 五月己丑 六月己未 七月戊子 八月戊午 九月丁亥 十月丁巳 十一月丙戌 十二月丙辰"),
    Filled((-50, 2, 6), "一月乙酉 二月乙卯 三月甲申 四月甲寅 五月癸未 六月癸丑 七月壬午 八月壬子 九月壬午 十月辛亥 十一月辛巳 十二月庚戌"),
    Filled((-49, 1, 27), "一月庚辰 二月己酉 閏二月己卯 三月戊申 四月戊寅 五月丁未 六月丁丑 七月丙午 八月丙子 九月乙巳 十月乙亥 十一月甲辰 十二月甲戌"),
    Filled((-48, 2, 15), "一月甲辰 二月癸酉 三月癸卯 四月壬申 五月壬寅 六月辛未 七月辛丑 八月庚午 九月庚子 十月己巳 十一月己亥 十二月戊辰"),
    Filled((-47, 2, 3), "一月戊戌 二月丁卯 三月丁酉 四月丁卯 五月丙申 六月丙寅 七月乙未 八月乙丑 九月甲午 十月甲子 閏十月癸巳 十一月癸亥 十二月壬辰"),
    Filled((-46, 2, 22), "一月壬戌 二月辛卯 三月辛酉 四月庚寅 五月庚申 六月己丑 七月己未 八月己丑 九月戊午 十月戊子 十一月丁巳 十二月丁亥"),
    Filled((-45, 2, 11), "一月丙辰 二月丙戌 三月乙卯 四月乙酉 五月甲寅 六月甲申 七月癸丑 八月癸未 九月壬子 十月壬午 十一月壬子 十二月辛巳"),
    Filled((-44, 2, 1), "一月辛亥 二月庚辰 三月庚戌 四月己卯 五月己酉 六月戊寅 七月戊申 閏七月丁丑 八月丁未 九月丙子 十月丙午 十一月乙亥 十二月乙巳"),
    Filled((-43, 2, 18), "一月甲戌 二月甲辰 三月甲戌 四月癸卯 五月癸酉 六月壬寅 七月壬申 八月辛丑 九月辛未 十月庚子 十一月庚午 十二月己亥"),
    Filled((-42, 2, 8), "一月己巳 二月戊戌 三月戊辰 四月丁酉 五月丁卯 六月丙申 七月丙寅 八月丙申 九月乙丑 十月乙未 十一月甲子 十二月甲午"),
    Filled((-41, 1, 28), "一月癸亥 二月癸巳 三月壬戌 四月壬辰 閏四月辛酉 五月辛卯 六月庚申 七月庚寅 八月己未 九月己丑 十月己未 十一月戊子 十二月戊午"),
    Filled((-40, 2, 16), "一月丁亥 二月丁巳 三月丙戌 四月丙辰 五月乙酉 六月乙卯 七月甲申 八月甲寅 九月癸未 十月癸丑 十一月壬午 十二月壬子"),
    Filled((-39, 2, 4), "一月辛巳 二月辛亥 三月辛巳 四月庚戌 五月庚辰 六月己酉 七月己卯 八月戊申 九月戊寅 十月丁未 十一月丁丑 十二月丙午 閏十二月丙子"),
    Filled((-38, 2, 23), "一月乙巳 二月乙亥 三月甲辰 四月甲戌 五月甲辰 六月癸酉 七月癸卯 八月壬申 九月壬寅 十月辛未 十一月辛丑 十二月庚午"),
    Filled((-37, 2, 13), "一月庚子 二月己巳 三月己亥 四月戊辰 五月戊戌 六月丁卯 七月丁酉 八月丙寅 九月丙申 十月丙寅 十一月乙未 十二月乙丑"),
    Filled((-36, 2, 2), "一月甲午 二月甲子 三月癸巳 四月癸亥 五月壬辰 六月壬戌 七月辛卯 八月辛酉 九月庚寅 閏九月庚申 十月己丑 十一月己未 十二月戊子"),
    Filled((-35, 2, 20), "一月戊午 二月戊子 三月丁巳 四月丁亥 五月丙辰 六月丙戌 七月乙卯 八月乙酉 九月甲寅 十月甲申 十一月癸丑 十二月癸未"),
    Filled((-34, 2, 9), "一月壬子 二月壬午 三月辛亥 四月辛巳 五月辛亥 六月庚辰 七月庚戌 八月己卯 九月己酉 十月戊寅 十一月戊申 十二月丁丑"),
    Filled((-33, 1, 30), "一月丁未 二月丙子 三月丙午 四月乙亥 五月乙巳 閏五月甲戌 六月甲辰 七月癸酉 八月癸卯 九月癸酉 十月壬寅 十一月壬申 十二月辛丑"),
    Filled((-32, 2, 18), "一月辛未 二月庚子 三月庚午 四月己亥 五月己巳 六月戊戌 七月戊辰 八月丁酉 九月丁卯 十月丙申 十一月丙寅 十二月丙申"),
    Filled((-31, 2, 6), "一月乙丑 二月乙未 三月甲子 四月甲午 五月癸亥 六月癸巳 七月壬戌 八月壬辰 九月辛酉 十月辛卯 十一月庚申 十二月庚寅"),
    Filled((-30, 1, 26), "一月己未 二月己丑 閏二月戊午 三月戊子 四月戊午 五月丁亥 六月丁巳 七月丙戌 八月丙辰 九月乙酉 十月乙卯 十一月甲申 十二月甲寅"),
    Filled((-29, 2, 14), "一月癸未 二月癸丑 三月壬午 四月壬子 五月辛巳 六月辛亥 七月庚辰 八月庚戌 九月庚辰 十月己酉 十一月己卯 十二月戊申"),
    Filled((-28, 2, 4), "一月戊寅 二月丁未 三月丁丑 四月丙午 五月丙子 六月乙巳 七月乙亥 八月甲辰 九月甲戌 十月癸卯 閏十月癸酉 十一月癸卯 十二月壬申"),
    Filled((-27, 2, 22), "一月壬寅 二月辛未 三月辛丑 四月庚午 五月庚子 六月己巳 七月己亥 八月戊辰 九月戊戌 十月丁卯 十一月丁酉 十二月丙寅"),
    Filled((-26, 2, 11), "一月丙申 二月乙丑 三月乙未 四月乙丑 五月甲午 六月甲子 七月癸巳 八月癸亥 九月壬辰 十月壬戌 十一月辛卯 十二月辛酉"),
    Filled((-25, 1, 31), "一月庚寅 二月庚申 三月己丑 四月己未 五月戊子 六月戊午 七月戊子 閏七月丁巳 八月丁亥 九月丙辰 十月丙戌 十一月乙卯 十二月乙酉"),
    Filled((-24, 2, 19), "一月甲寅 二月甲申 三月癸丑 四月癸未 五月壬子 六月壬午 七月辛亥 八月辛巳 九月庚戌 十月庚辰 十一月庚戌 十二月己卯"),
    Filled((-23, 2, 8), "一月己酉 二月戊寅 三月戊申 四月丁丑 五月丁未 六月丙子 七月丙午 八月乙亥 九月乙巳 十月甲戌 十一月甲辰 十二月癸酉"),
    Filled((-22, 1, 28), "一月癸卯 二月壬申 三月壬寅 四月壬申 閏四月辛丑 五月辛未 六月庚子 七月庚午 八月己亥 九月己巳 十月戊戌 十一月戊辰 十二月丁酉"),
    Filled((-21, 2, 16), "一月丁卯 二月丙申 三月丙寅 四月乙未 五月乙丑 六月乙未 七月甲子 八月甲午 九月癸亥 十月癸巳 十一月壬戌 十二月壬辰"),
    Filled((-20, 2, 5), "一月辛酉 二月辛卯 三月庚申 四月庚寅 五月己未 六月己丑 七月戊午 八月戊子 九月丁巳 十月丁亥 十一月丁巳 十二月丙戌 閏十二月丙辰"),
    Filled((-19, 2, 23), "一月乙酉 二月乙卯 三月甲申 四月甲寅 五月癸未 六月癸丑 七月壬午 八月壬子 九月辛巳 十月辛亥 十一月庚辰 十二月庚戌"),
    Filled((-18, 2, 13), "一月庚辰 二月己酉 三月己卯 四月戊申 五月戊寅 六月丁未 七月丁丑 八月丙午 九月丙子 十月乙巳 十一月乙亥 十二月甲辰"),
    Filled((-17, 2, 2), "一月甲戌 二月癸卯 三月癸酉 四月壬寅 五月壬申 六月壬寅 七月辛未 八月辛丑 九月庚午 閏九月庚子 十月己巳 十一月己亥 十二月戊辰"),
    Filled((-16, 2, 21), "一月戊戌 二月丁卯 三月丁酉 四月丙寅 五月丙申 六月乙丑 七月乙未 八月甲子 九月甲午 十月甲子 十一月癸巳 十二月癸亥"),
    Filled((-15, 2, 9), "一月壬辰 二月壬戌 三月辛卯 四月辛酉 五月庚寅 六月庚申 七月己丑 八月己未 九月戊子 十月戊午 十一月丁亥 十二月丁巳"),
    Filled((-14, 1, 30), "一月丁亥 二月丙辰 三月丙戌 四月乙卯 五月乙酉 閏五月甲寅 六月甲申 七月癸丑 八月癸未 九月壬子 十月壬午 十一月辛亥 十二月辛巳"),
    Filled((-13, 2, 17), "一月庚戌 二月庚辰 三月己酉 四月己卯 五月己酉 六月戊寅 七月戊申 八月丁丑 九月丁未 十月丙子 十一月丙午 十二月乙亥"),
    Filled((-12, 2, 7), "一月乙巳 二月甲戌 三月甲辰 四月癸酉 五月癸卯 六月壬申 七月壬寅 八月壬申 九月辛丑 十月辛未 十一月庚子 十二月庚午"),
    Filled((-11, 1, 26), "一月己亥 二月己巳 閏二月戊戌 三月戊辰 四月丁酉 五月丁卯 六月丙申 七月丙寅 八月乙未 九月乙丑 十月甲午 十一月甲子 十二月甲午"),
    Filled((-10, 2, 14), "一月癸亥 二月癸巳 三月壬戌 四月壬辰 五月辛酉 六月辛卯 七月庚申 八月庚寅 九月己未 十月己丑 十一月戊午 十二月戊子"),
    Filled((-9, 2, 3), "一月丁巳 二月丁亥 三月丙辰 四月丙戌 五月丙辰 六月乙酉 七月乙卯 八月甲申 九月甲寅 十月癸未 閏十月癸丑 十一月壬午 十二月壬子"),
    Filled((-8, 2, 22), "一月辛巳 二月辛亥 三月庚辰 四月庚戌 五月己卯 六月己酉 七月己卯 八月戊申 九月戊寅 十月丁未 十一月丁丑 十二月丙午"),
    Filled((-7, 2, 11), "一月丙子 二月乙巳 三月乙亥 四月甲辰 五月甲戌 六月癸卯 七月癸酉 八月壬寅 九月壬申 十月辛丑 十一月辛未 十二月辛丑"),
    Filled((-6, 1, 31), "一月庚午 二月庚子 三月己巳 四月己亥 五月戊辰 六月戊戌 七月丁卯 閏七月丁酉 八月丙寅 九月丙申 十月乙丑 十一月乙未 十二月甲子"),
    Filled((-5, 2, 19), "一月甲午 二月甲子 三月癸巳 四月癸亥 五月壬辰 六月壬戌 七月辛卯 八月辛酉 九月庚寅 十月庚申 十一月己丑 十二月己未"),
    Filled((-4, 2, 8), "一月戊子 二月戊午 三月丁亥 四月丁巳 五月丙戌 六月丙辰 七月丙戌 八月乙卯 九月乙酉 十月甲寅 十一月甲申 十二月癸丑"),
    Filled((-3, 1, 28), "一月癸未 二月壬子 三月壬午 四月辛亥 閏四月辛巳 五月庚戌 六月庚辰 七月己酉 八月己卯 九月戊申 十月戊寅 十一月戊申 十二月丁丑"),
    Filled((-2, 2, 16), "一月丁未 二月丙子 三月丙午 四月乙亥 五月乙巳 六月甲戌 七月甲辰 八月癸酉 九月癸卯 十月壬申 十一月壬寅 十二月辛未"),
    Filled((-1, 2, 5), "一月辛丑 二月辛未 三月庚子 四月庚午 五月己亥 六月己巳 七月戊戌 八月戊辰 九月丁酉 十月丁卯 十一月丙申 十二月丙寅 閏十二月乙未"),
    Filled((0, 2, 24), "一月乙丑 二月甲午 三月甲子 四月癸巳 五月癸亥 六月癸巳 七月壬戌 八月壬辰 九月辛酉 十月辛卯 十一月庚申 十二月庚寅"),
    Filled((1, 2, 12), "一月己未 二月己丑 三月戊午 四月戊子 五月丁巳 六月丁亥 七月丙辰 八月丙戌 九月丙辰 十月乙酉 十一月乙卯 十二月甲申"),
    Filled((2, 2, 2), "一月甲寅 二月癸未 三月癸丑 四月壬午 五月壬子 六月辛巳 七月辛亥 八月庚辰 九月庚戌 閏九月己卯 十月己酉 十一月戊寅 十二月戊申"),
    Filled((3, 2, 21), "一月戊寅 二月丁未 三月丁丑 四月丙午 五月丙子 六月乙巳 七月乙亥 八月甲辰 九月甲戌 十月癸卯 十一月癸酉 十二月壬寅"),
    Filled((4, 2, 10), "一月壬申 二月辛丑 三月辛未 四月庚子 五月庚午 六月庚子 七月己巳 八月己亥 九月戊辰 十月戊戌 十一月丁卯 十二月丁酉"),
    Filled((5, 1, 29), "一月丙寅 二月丙申 三月乙丑 四月乙未 五月甲子 閏五月甲午 六月癸亥 七月癸巳 八月癸亥 九月壬辰 十月壬戌 十一月辛卯 十二月辛酉"),
    Filled((6, 2, 17), "一月庚寅 二月庚申 三月己丑 四月己未 五月戊子 六月戊午 七月丁亥 八月丁巳 九月丙戌 十月丙辰 十一月乙酉 十二月乙卯"),
    Filled((7, 2, 7), "一月乙酉 二月甲寅 三月甲申 四月癸丑 五月癸未 六月壬子 七月壬午 八月辛亥 九月辛巳 十月庚戌 十一月庚辰 十二月己酉"),
    Filled((8, 1, 27), "一月己卯 二月戊申 閏二月戊寅 三月戊申 四月丁丑 五月丁未 六月丙子 七月丙午 八月乙亥 九月乙巳 十月甲戌 十一月甲辰 十二月癸酉"),
    Filled((9, 2, 14), "一月癸卯 二月壬申 三月壬寅 四月辛未 五月辛丑 六月庚午 七月庚子 八月庚午 九月己亥 十月己巳 十一月戊戌 十二月戊辰"),
    Filled((10, 2, 3), "一月丁酉 二月丁卯 三月丙申 四月丙寅 五月乙未 六月乙丑 七月甲午 八月甲子 九月癸巳 十月癸亥 閏十月壬辰 十一月壬戌 十二月壬辰"),
    Filled((11, 2, 22), "一月辛酉 二月辛卯 三月庚申 四月庚寅 五月己未 六月己丑 七月戊午 八月戊子 九月丁巳 十月丁亥 十一月丙辰 十二月丙戌"),
    Filled((12, 2, 11), "一月乙卯 二月乙酉 三月乙卯 四月甲申 五月甲寅 六月癸未 七月癸丑 八月壬午 九月壬子 十月辛巳 十一月辛亥 十二月庚辰"),
    Filled((13, 1, 31), "一月庚戌 二月己卯 三月己酉 四月戊寅 五月戊申 六月丁丑 七月丁未 閏七月丁丑 八月丙午 九月丙子 十月乙巳 十一月乙亥 十二月甲辰"),
    Filled((14, 2, 19), "一月甲戌 二月癸卯 三月癸酉 四月壬寅 五月壬申 六月辛丑 七月辛未 八月庚子 九月庚午 十月庚子 十一月己巳 十二月己亥"),
    Filled((15, 2, 8), "一月戊辰 二月戊戌 三月丁卯 四月丁酉 五月丙寅 六月丙申 七月乙丑 八月乙未 九月甲子 十月甲午 十一月癸亥 十二月癸巳"),
    Filled((16, 1, 28), "一月壬戌 二月壬辰 三月壬戌 四月辛卯 閏四月辛酉 五月庚寅 六月庚申 七月己丑 八月己未 九月戊子 十月戊午 十一月丁亥 十二月丁巳"),
    Filled((17, 2, 15), "一月丙戌 二月丙辰 三月乙酉 四月乙卯 五月甲申 六月甲寅 七月甲申 八月癸丑 九月癸未 十月壬子 十一月壬午 十二月辛亥"),
    Filled((18, 2, 5), "一月辛巳 二月庚戌 三月庚辰 四月己酉 五月己卯 六月戊申 七月戊寅 八月丁未 九月丁丑 十月丁未 十一月丙子 十二月丙午 閏十二月乙亥"),
    Filled((19, 2, 24), "一月乙巳 二月甲戌 三月甲辰 四月癸酉 五月癸卯 六月壬申 七月壬寅 八月辛未 九月辛丑 十月庚午 十一月庚子 十二月己巳"),
    Filled((20, 2, 13), "一月己亥 二月己巳 三月戊戌 四月戊辰 五月丁酉 六月丁卯 七月丙申 八月丙寅 九月乙未 十月乙丑 十一月甲午 十二月甲子"),
    Filled((21, 2, 1), "一月癸巳 二月癸亥 三月壬辰 四月壬戌 五月壬辰 六月辛酉 七月辛卯 八月庚申 九月庚寅 閏九月己未 十月己丑 十一月戊午 十二月戊子"),
    Filled((22, 2, 20), "一月丁巳 二月丁亥 三月丙辰 四月丙戌 五月乙卯 六月乙酉 七月甲寅 八月甲申 九月甲寅 十月癸未 十一月癸丑 十二月壬午"),
    Filled((23, 2, 10), "一月壬子 二月辛巳 三月辛亥 四月庚辰 五月庚戌 六月己卯 七月己酉 八月戊寅 九月戊申 十月丁丑 十一月丁未 十二月丙子"),
    Filled((24, 1, 30), "一月丙午 二月丙子 三月乙巳 四月乙亥 五月甲辰 閏五月甲戌 六月癸卯 七月癸酉 八月壬寅 九月壬申 十月辛丑 十一月辛未 十二月庚子"),
    Filled((25, 2, 17), "一月庚午 二月己亥 三月己巳 四月己亥 五月戊辰 六月戊戌 七月丁卯 八月丁酉 九月丙寅 十月丙申 十一月乙丑 十二月乙未"),
    Filled((26, 2, 6), "一月甲子 二月甲午 三月癸亥 四月癸巳 五月壬戌 六月壬辰 七月辛酉 八月辛卯 九月辛酉 十月庚寅 十一月庚申 十二月己丑"),
    Filled((27, 1, 27), "一月己未 二月戊子 閏二月戊午 三月丁亥 四月丁巳 五月丙戌 六月丙辰 七月乙酉 八月乙卯 九月甲申 十月甲寅 十一月甲申 十二月癸丑"),
    Filled((28, 2, 15), "一月癸未 二月壬子 三月壬午 四月辛亥 五月辛巳 六月庚戌 七月庚辰 八月己酉 九月己卯 十月戊申 十一月戊寅 十二月丁未"),
    Filled((29, 2, 3), "一月丁丑 二月丙午 三月丙子 四月丙午 五月乙亥 六月乙巳 七月甲戌 八月甲辰 九月癸酉 十月癸卯 閏十月壬申 十一月壬寅 十二月辛未"),
    Filled((30, 2, 22), "一月辛丑 二月庚午 三月庚子 四月己巳 五月己亥 六月戊辰 七月戊戌 八月戊辰 九月丁酉 十月丁卯 十一月丙申 十二月丙寅"),
    Filled((31, 2, 11), "一月乙未 二月乙丑 三月甲午 四月甲子 五月癸巳 六月癸亥 七月壬辰 八月壬戌 九月辛卯 十月辛酉 十一月辛卯 十二月庚申"),
    Filled((32, 2, 1), "一月庚寅 二月己未 三月己丑 四月戊午 五月戊子 六月丁巳 七月丁亥 閏七月丙辰 八月丙戌 九月乙卯 十月乙酉 十一月甲寅 十二月甲申"),
    Filled((33, 2, 18), "一月癸丑 二月癸未 三月癸丑 四月壬午 五月壬子 六月辛巳 七月辛亥 八月庚辰 九月庚戌 十月己卯 十一月己酉 十二月戊寅"),
    Filled((34, 2, 8), "一月戊申 二月丁丑 三月丁未 四月丙子 五月丙午 六月丙子 七月乙巳 八月乙亥 九月甲辰 十月甲戌 十一月癸卯 十二月癸酉"),
    Filled((35, 1, 28), "一月壬寅 二月壬申 三月辛丑 四月辛未 閏四月庚子 五月庚午 六月己亥 七月己巳 八月戊戌 九月戊辰 十月戊戌 十一月丁卯 十二月丁酉"),
    Filled((36, 2, 16), "一月丙寅 二月丙申 三月乙丑 四月乙未 五月甲子 六月甲午 七月癸亥 八月癸巳 九月壬戌 十月壬辰 十一月辛酉 十二月辛卯"),
    Filled((37, 2, 4), "一月庚申 二月庚寅 三月庚申 四月己丑 五月己未 六月戊子 七月戊午 八月丁亥 九月丁巳 十月丙戌 十一月丙辰 十二月乙酉 閏十二月乙卯"),
    Filled((38, 2, 23), "一月甲申 二月甲寅 三月癸未 四月癸丑 五月癸未 六月壬子 七月壬午 八月辛亥 九月辛巳 十月庚戌 十一月庚辰 十二月己酉"),
    Filled((39, 2, 13), "一月己卯 二月戊申 三月戊寅 四月丁未 五月丁丑 六月丙午 七月丙子 八月乙巳 九月乙亥 十月乙巳 十一月甲戌 十二月甲辰"),
    Filled((40, 2, 2), "一月癸酉 二月癸卯 三月壬申 四月壬寅 五月辛未 六月辛丑 七月庚午 八月庚子 九月己巳 閏九月己亥 十月戊辰 十一月戊戌 十二月戊辰"),
    Filled((41, 2, 20), "一月丁酉 二月丁卯 三月丙申 四月丙寅 五月乙未 六月乙丑 七月甲午 八月甲子 九月癸巳 十月癸亥 十一月壬辰 十二月壬戌"),
    Filled((42, 2, 9), "一月辛卯 二月辛酉 三月庚寅 四月庚申 五月庚寅 六月己未 七月己丑 八月戊午 九月戊子 十月丁巳 十一月丁亥 十二月丙辰"),
    Filled((43, 1, 30), "一月丙戌 二月乙卯 三月乙酉 四月甲寅 五月甲申 閏五月癸丑 六月癸未 七月壬子 八月壬午 九月壬子 十月辛巳 十一月辛亥 十二月庚辰"),
    Filled((44, 2, 18), "一月庚戌 二月己卯 三月己酉 四月戊寅 五月戊申 六月丁丑 七月丁未 八月丙子 九月丙午 十月乙亥 十一月乙巳 十二月乙亥"),
    Filled((45, 2, 6), "一月甲辰 二月甲戌 三月癸卯 四月癸酉 五月壬寅 六月壬申 七月辛丑 八月辛未 九月庚子 十月庚午 十一月己亥 十二月己巳"),
    Filled((46, 1, 26), "一月戊戌 二月戊辰 閏二月丁酉 三月丁卯 四月丁酉 五月丙寅 六月丙申 七月乙丑 八月乙未 九月甲子 十月甲午 十一月癸亥 十二月癸巳"),
    Filled((47, 2, 14), "一月壬戌 二月壬辰 三月辛酉 四月辛卯 五月庚申 六月庚寅 七月庚申 八月己丑 九月己未 十月戊子 十一月戊午 十二月丁亥"),
    Filled((48, 2, 4), "一月丁巳 二月丙戌 三月丙辰 四月乙酉 五月乙卯 六月甲申 七月甲寅 八月癸未 九月癸丑 十月壬午 閏十月壬子 十一月壬午 十二月辛亥"),
    Filled((49, 2, 22), "一月辛巳 二月庚戌 三月庚辰 四月己酉 五月己卯 六月戊申 七月戊寅 八月丁未 九月丁丑 十月丙午 十一月丙子 十二月乙巳"),
    Filled((50, 2, 11), "一月乙亥 二月甲辰 三月甲戌 四月甲辰 五月癸酉 六月癸卯 七月壬申 八月壬寅 九月辛未 十月辛丑 十一月庚午 十二月庚子"),
    Filled((51, 1, 31), "一月己巳 二月己亥 三月戊辰 四月戊戌 五月丁卯 六月丁酉 七月丁卯 閏七月丙申 八月丙寅 九月乙未 十月乙丑 十一月甲午 十二月甲子"),
    Filled((52, 2, 19), "一月癸巳 二月癸亥 三月壬辰 四月壬戌 五月辛卯 六月辛酉 七月庚寅 八月庚申 九月己丑 十月己未 十一月己丑 十二月戊午"),
    Filled((53, 2, 8), "一月戊子 二月丁巳 三月丁亥 四月丙辰 五月丙戌 六月乙卯 七月乙酉 八月甲寅 九月甲申 十月癸丑 十一月癸未 十二月壬子"),
    Filled((54, 1, 28), "一月壬午 二月壬子 三月辛巳 四月辛亥 閏四月庚辰 五月庚戌 六月己卯 七月己酉 八月戊寅 九月戊申 十月丁丑 十一月丁未 十二月丙子"),
    Filled((55, 2, 16), "一月丙午 二月乙亥 三月乙巳 四月甲戌 五月甲辰 六月甲戌 七月癸卯 八月癸酉 九月壬寅 十月壬申 十一月辛丑 十二月辛未"),
    Filled((56, 2, 5), "一月庚子 二月庚午 三月己亥 四月己巳 五月戊戌 六月戊辰 七月丁酉 八月丁卯 九月丙申 十月丙寅 十一月丙申 十二月乙丑 閏十二月乙未"),
    Filled((57, 2, 23), "一月甲子 二月甲午 三月癸亥 四月癸巳 五月壬戌 六月壬辰 七月辛酉 八月辛卯 九月庚申 十月庚寅 十一月己未 十二月己丑"),
    Filled((58, 2, 13), "一月己未 二月戊子 三月戊午 四月丁亥 五月丁巳 六月丙戌 七月丙辰 八月乙酉 九月乙卯 十月甲申 十一月甲寅 十二月癸未"),
    Filled((59, 2, 2), "一月癸丑 二月壬午 三月壬子 四月辛巳 五月辛亥 六月辛巳 七月庚戌 八月庚辰 九月己酉 閏九月己卯 十月戊申 十一月戊寅 十二月丁未"),
    Filled((60, 2, 21), "一月丁丑 二月丙午 三月丙子 四月乙巳 五月乙亥 六月甲辰 七月甲戌 八月甲辰 九月癸酉 十月癸卯 十一月壬申 十二月壬寅"),
    Filled((61, 2, 9), "一月辛未 二月辛丑 三月庚午 四月庚子 五月己巳 六月己亥 七月戊辰 八月戊戌 九月丁卯 十月丁酉 十一月丙寅 十二月丙申"),
    Filled((62, 1, 30), "一月丙寅 二月乙未 三月乙丑 四月甲午 五月甲子 閏五月癸巳 六月癸亥 七月壬辰 八月壬戌 九月辛卯 十月辛酉 十一月庚寅 十二月庚申"),
    Filled((63, 2, 17), "一月己丑 二月己未 三月戊子 四月戊午 五月戊子 六月丁巳 七月丁亥 八月丙辰 九月丙戌 十月乙卯 十一月乙酉 十二月甲寅"),
    Filled((64, 2, 7), "一月甲申 二月癸丑 三月癸未 四月壬子 五月壬午 六月辛亥 七月辛巳 八月辛亥 九月庚辰 十月庚戌 十一月己卯 十二月己酉"),
    Filled((65, 1, 26), "一月戊寅 二月戊申 閏二月丁丑 三月丁未 四月丙子 五月丙午 六月乙亥 七月乙巳 八月甲戌 九月甲辰 十月癸酉 十一月癸卯 十二月癸酉"),
    Filled((66, 2, 14), "一月壬寅 二月壬申 三月辛丑 四月辛未 五月庚子 六月庚午 七月己亥 八月己巳 九月戊戌 十月戊辰 十一月丁酉 十二月丁卯"),
    Filled((67, 2, 3), "一月丙申 二月丙寅 三月丙申 四月乙丑 五月乙未 六月甲子 七月甲午 八月癸亥 九月癸巳 十月壬戌 閏十月壬辰 十一月辛酉 十二月辛卯"),
    Filled((68, 2, 22), "一月庚申 二月庚寅 三月己未 四月己丑 五月戊午 六月戊子 七月戊午 八月丁亥 九月丁巳 十月丙戌 十一月丙辰 十二月乙酉"),
    Filled((69, 2, 11), "一月乙卯 二月甲申 三月甲寅 四月癸未 五月癸丑 六月壬午 七月壬子 八月辛巳 九月辛亥 十月庚辰 十一月庚戌 十二月庚辰"),
    Filled((70, 1, 31), "一月己酉 二月己卯 三月戊申 四月戊寅 五月丁未 六月丁丑 七月丙午 閏七月丙子 八月乙巳 九月乙亥 十月甲辰 十一月甲戌 十二月癸卯"),
    Filled((71, 2, 19), "一月癸酉 二月癸卯 三月壬申 四月壬寅 五月辛未 六月辛丑 七月庚午 八月庚子 九月己巳 十月己亥 十一月戊辰 十二月戊戌"),
    Filled((72, 2, 8), "一月丁卯 二月丁酉 三月丙寅 四月丙申 五月乙丑 六月乙未 七月乙丑 八月甲午 九月甲子 十月癸巳 十一月癸亥 十二月壬辰"),
    Filled((73, 1, 28), "一月壬戌 二月辛卯 三月辛酉 四月庚寅 閏四月庚申 五月己丑 六月己未 七月戊子 八月戊午 九月戊子 十月丁巳 十一月丁亥 十二月丙辰"),
    Filled((74, 2, 16), "一月丙戌 二月乙卯 三月乙酉 四月甲寅 五月甲申 六月癸丑 七月癸未 八月壬子 九月壬午 十月辛亥 十一月辛巳 十二月庚戌"),
    Filled((75, 2, 5), "一月庚辰 二月庚戌 三月己卯 四月己酉 五月戊寅 六月戊申 七月丁丑 八月丁未 九月丙子 十月丙午 十一月乙亥 十二月乙巳 閏十二月甲戌"),
    Filled((76, 2, 24), "一月甲辰 二月癸酉 三月癸卯 四月壬申 五月壬寅 六月壬申 七月辛丑 八月辛未 九月庚子 十月庚午 十一月己亥 十二月己巳"),
    Filled((77, 2, 12), "一月戊戌 二月戊辰 三月丁酉 四月丁卯 五月丙申 六月丙寅 七月乙未 八月乙丑 九月乙未 十月甲子 十一月甲午 十二月癸亥"),
    Filled((78, 2, 2), "一月癸巳 二月壬戌 三月壬辰 四月辛酉 五月辛卯 六月庚申 七月庚寅 八月己未 九月己丑 閏九月戊午 十月戊子 十一月丁巳 十二月丁亥"),
    Filled((79, 2, 21), "一月丁巳 二月丙戌 三月丙辰 四月乙酉 五月乙卯 六月甲申 七月甲寅 八月癸未 九月癸丑 十月壬午 十一月壬子 十二月辛巳"),
    Filled((80, 2, 10), "一月辛亥 二月庚辰 三月庚戌 四月庚辰 五月己酉 六月己卯 七月戊申 八月戊寅 九月丁未 十月丁丑 十一月丙午 十二月丙子"),
    Filled((81, 1, 29), "一月乙巳 二月乙亥 三月甲辰 四月甲戌 五月癸卯 閏五月癸酉 六月壬寅 七月壬申 八月壬寅 九月辛未 十月辛丑 十一月庚午 十二月庚子"),
    Filled((82, 2, 17), "一月己巳 二月己亥 三月戊辰 四月戊戌 五月丁卯 六月丁酉 七月丙寅 八月丙申 九月乙丑 十月乙未 十一月甲子 十二月甲午"),
    Filled((83, 2, 7), "一月甲子 二月癸巳 三月癸亥 四月壬辰 五月壬戌 六月辛卯 七月辛酉 八月庚寅 九月庚申 十月己丑 十一月己未 十二月戊子"),
    Filled((84, 1, 27), "一月戊午 二月丁亥 閏二月丁巳 三月丁亥 四月丙辰 五月丙戌 六月乙卯 七月乙酉 八月甲寅 九月甲申 十月癸丑 十一月癸未 十二月壬子"),
    Filled((85, 2, 14), "一月壬午 二月辛亥 三月庚辰 四月庚戌 五月己卯 六月己酉 七月戊寅 八月戊申 九月丁丑 十月丁未 十一月丙子 十二月丙午"),
    Filled((86, 2, 3), "一月丙子 二月乙巳 三月乙亥 四月甲辰 五月甲戌 六月癸卯 七月癸酉 八月壬寅 九月壬申 十月辛丑 十一月辛未 閏十一月庚子 十二月庚午"),
    Filled((87, 2, 21), "一月己亥 二月己巳 三月戊戌 四月戊辰 五月戊戌 六月丁卯 七月丁酉 八月丙寅 九月丙申 十月乙丑 十一月乙未 十二月甲子"),
    Filled((88, 2, 11), "一月甲午 二月癸亥 三月癸巳 四月壬戌 五月壬辰 六月辛酉 七月辛卯 八月庚申 九月庚寅 十月庚申 十一月己丑 十二月己未"),
    Filled((89, 1, 30), "一月戊子 二月戊午 三月丁亥 四月丁巳 五月丙戌 六月丙辰 七月乙酉 閏七月乙卯 八月甲申 九月甲寅 十月癸未 十一月癸丑 十二月癸未"),
    Filled((90, 2, 18), "一月壬子 二月壬午 三月辛亥 四月辛巳 五月庚戌 六月庚辰 七月己酉 八月己卯 九月戊申 十月戊寅 十一月丁未 十二月丁丑"),
    Filled((91, 2, 7), "一月丙午 二月丙子 三月乙巳 四月乙亥 五月乙巳 六月甲戌 七月甲辰 八月癸酉 九月癸卯 十月壬申 十一月壬寅 十二月辛未"),
    Filled((92, 1, 28), "一月辛丑 二月庚午 三月庚子 四月己巳 閏四月己亥 五月戊辰 六月戊戌 七月戊辰 八月丁酉 九月丁卯 十月丙申 十一月丙寅 十二月乙未"),
    Filled((93, 2, 15), "一月乙丑 二月甲午 三月甲子 四月癸巳 五月癸亥 六月壬辰 七月壬戌 八月辛卯 九月辛酉 十月庚寅 十一月庚申 十二月庚寅"),
    Filled((94, 2, 4), "一月己未 二月己丑 三月戊午 四月戊子 五月丁巳 六月丁亥 七月丙辰 八月丙戌 九月乙卯 十月乙酉 十一月甲寅 十二月甲申"),
    Filled((95, 1, 24), "一月癸丑 閏一月癸未 二月壬子 三月壬午 四月壬子 五月辛巳 六月辛亥 七月庚辰 八月庚戌 九月己卯 十月己酉 十一月戊寅 十二月戊申"),
    Filled((96, 2, 12), "一月丁丑 二月丁未 三月丙子 四月丙午 五月乙亥 六月乙巳 七月乙亥 八月甲辰 九月甲戌 十月癸卯 十一月癸酉 十二月壬寅"),
    Filled((97, 2, 1), "一月壬申 二月辛丑 三月辛未 四月庚子 五月庚午 六月己亥 七月己巳 八月戊戌 九月戊辰 閏九月丁酉 十月丁卯 十一月丁酉 十二月丙寅"),
    Filled((98, 2, 20), "一月丙申 二月乙丑 三月乙未 四月甲子 五月甲午 六月癸亥 七月癸巳 八月壬戌 九月壬辰 十月辛酉 十一月辛卯 十二月庚申"),
    Filled((99, 2, 9), "一月庚寅 二月庚申 三月己丑 四月己未 五月戊子 六月戊午 七月丁亥 八月丁巳 九月丙戌 十月丙辰 十一月乙酉 十二月乙卯"),
    Filled((100, 1, 29), "一月甲申 二月甲寅 三月癸未 四月癸丑 五月壬午 六月壬子 閏六月壬午 七月辛亥 八月辛巳 九月庚戌 十月庚辰 十一月己酉 十二月己卯"),
    Filled((101, 2, 16), "一月戊申 二月戊寅 三月丁未 四月丁丑 五月丙午 六月丙子 七月乙巳 八月乙亥 九月甲辰 十月甲戌 十一月甲辰 十二月癸酉"),
    Filled((102, 2, 6), "一月癸卯 二月壬申 三月壬寅 四月辛未 五月辛丑 六月庚午 七月庚子 八月己巳 九月己亥 十月戊辰 十一月戊戌 十二月丁卯"),
    Filled((103, 1, 26), "一月丁酉 二月丁卯 閏二月丙申 三月丙寅 四月乙未 五月乙丑 六月甲午 七月甲子 八月癸巳 九月癸亥 十月壬辰 十一月壬戌 十二月辛卯"),
    Filled((104, 2, 14), "一月辛酉 二月庚寅 三月庚申 四月己丑 五月己未 六月己丑 七月戊午 八月戊子 九月丁巳 十月丁亥 十一月丙辰 十二月丙戌"),
    Filled((105, 2, 2), "一月乙卯 二月乙酉 三月甲寅 四月甲申 五月癸丑 六月癸未 七月壬子 八月壬午 九月壬子 十月辛巳 十一月辛亥 閏十一月庚辰 十二月庚戌"),
    Filled((106, 2, 21), "一月己卯 二月己酉 三月戊寅 四月戊申 五月丁丑 六月丁未 七月丙子 八月丙午 九月乙亥 十月乙巳 十一月甲戌 十二月甲辰"),
    Filled((107, 2, 11), "一月甲戌 二月癸卯 三月癸酉 四月壬寅 五月壬申 六月辛丑 七月辛未 八月庚子 九月庚午 十月己亥 十一月己巳 十二月戊戌"),
    Filled((108, 1, 31), "一月戊辰 二月丁酉 三月丁卯 四月丙申 五月丙寅 六月丙申 七月乙丑 閏七月乙未 八月甲子 九月甲午 十月癸亥 十一月癸巳 十二月壬戌"),
    Filled((109, 2, 18), "一月壬辰 二月辛酉 三月辛卯 四月庚申 五月庚寅 六月己未 七月己丑 八月己未 九月戊子 十月戊午 十一月丁亥 十二月丁巳"),
    Filled((110, 2, 7), "一月丙戌 二月丙辰 三月乙酉 四月乙卯 五月甲申 六月甲寅 七月癸未 八月癸丑 九月壬午 十月壬子 十一月辛巳 十二月辛亥"),
    Filled((111, 1, 28), "一月辛巳 二月庚戌 三月庚辰 四月己酉 閏四月己卯 五月戊申 六月戊寅 七月丁未 八月丁丑 九月丙午 十月丙子 十一月乙巳 十二月乙亥"),
    Filled((112, 2, 15), "一月甲辰 二月甲戌 三月甲辰 四月癸酉 五月癸卯 六月壬申 七月壬寅 八月辛未 九月辛丑 十月庚午 十一月庚子 十二月己巳"),
    Filled((113, 2, 4), "一月己亥 二月戊辰 三月戊戌 四月丁卯 五月丁酉 六月丙寅 七月丙申 八月丙寅 九月乙未 十月乙丑 十一月甲午 十二月甲子"),
    Filled((114, 1, 24), "一月癸巳 閏一月癸亥 二月壬辰 三月壬戌 四月辛卯 五月辛酉 六月庚寅 七月庚申 八月己丑 九月己未 十月戊子 十一月戊午 十二月戊子"),
    Filled((115, 2, 12), "一月丁巳 二月丁亥 三月丙辰 四月丙戌 五月乙卯 六月乙酉 七月甲寅 八月甲申 九月癸丑 十月癸未 十一月壬子 十二月壬午"),
    Filled((116, 2, 1), "一月辛亥 二月辛巳 三月辛亥 四月庚辰 五月庚戌 六月己卯 七月己酉 八月戊寅 九月戊申 閏九月丁丑 十月丁未 十一月丙子 十二月丙午"),
    Filled((117, 2, 19), "一月乙亥 二月乙巳 三月甲戌 四月甲辰 五月癸酉 六月癸卯 七月癸酉 八月壬寅 九月壬申 十月辛丑 十一月辛未 十二月庚子"),
    Filled((118, 2, 9), "一月庚午 二月己亥 三月己巳 四月戊戌 五月戊辰 六月丁酉 七月丁卯 八月丙申 九月丙寅 十月丙申 十一月乙丑 十二月乙未"),
    Filled((119, 1, 29), "一月甲子 二月甲午 三月癸亥 四月癸巳 五月壬戌 六月壬辰 閏六月辛酉 七月辛卯 八月庚申 九月庚寅 十月己未 十一月己丑 十二月戊午"),
    Filled((120, 2, 17), "一月戊子 二月戊午 三月丁亥 四月丁巳 五月丙戌 六月丙辰 七月乙酉 八月乙卯 九月甲申 十月甲寅 十一月癸未 十二月癸丑"),
    Filled((121, 2, 5), "一月壬午 二月壬子 三月辛巳 四月辛亥 五月庚辰 六月庚戌 七月庚辰 八月己酉 九月己卯 十月戊申 十一月戊寅 十二月丁未"),
    Filled((122, 1, 26), "一月丁丑 二月丙午 閏二月丙子 三月乙巳 四月乙亥 五月甲辰 六月甲戌 七月癸卯 八月癸酉 九月癸卯 十月壬申 十一月壬寅 十二月辛未"),
    Filled((123, 2, 14), "一月辛丑 二月庚午 三月庚子 四月己巳 五月己亥 六月戊辰 七月戊戌 八月丁卯 九月丁酉 十月丙寅 十一月丙申 十二月乙丑"),
    Filled((124, 2, 3), "一月乙未 二月乙丑 三月甲午 四月甲子 五月癸巳 六月癸亥 七月壬辰 八月壬戌 九月辛卯 十月辛酉 十一月庚寅 閏十一月庚申 十二月己丑"),
    Filled((125, 2, 21), "一月己未 二月戊子 三月戊午 四月戊子 五月丁巳 六月丁亥 七月丙辰 八月丙戌 九月乙卯 十月乙酉 十一月甲寅 十二月甲申"),
    Filled((126, 2, 10), "一月癸丑 二月癸未 三月壬子 四月壬午 五月辛亥 六月辛巳 七月庚戌 八月庚辰 九月庚戌 十月己卯 十一月己酉 十二月戊寅"),
    Filled((127, 1, 31), "一月戊申 二月丁丑 三月丁未 四月丙子 五月丙午 六月乙亥 七月乙巳 閏七月甲戌 八月甲辰 九月癸酉 十月癸卯 十一月壬申 十二月壬寅"),
    Filled((128, 2, 19), "一月壬申 二月辛丑 三月辛未 四月庚子 五月庚午 六月己亥 七月己巳 八月戊戌 九月戊辰 十月丁酉 十一月丁卯 十二月丙申"),
    Filled((129, 2, 7), "一月丙寅 二月乙未 三月乙丑 四月乙未 五月甲子 六月甲午 七月癸亥 八月癸巳 九月壬戌 十月壬辰 十一月辛酉 十二月辛卯"),
    Filled((130, 1, 27), "一月庚申 二月庚寅 三月己未 四月己丑 閏四月戊午 五月戊子 六月丁巳 七月丁亥 八月丁巳 九月丙戌 十月丙辰 十一月乙酉 十二月乙卯"),
    Filled((131, 2, 15), "一月甲申 二月甲寅 三月癸未 四月癸丑 五月壬午 六月壬子 七月辛巳 八月辛亥 九月庚辰 十月庚戌 十一月庚辰 十二月己酉"),
    Filled((132, 2, 5), "一月己卯 二月戊申 三月戊寅 四月丁未 五月丁丑 六月丙午 七月丙子 八月乙巳 九月乙亥 十月甲辰 十一月甲戌 十二月癸卯"),
    Filled((133, 1, 24), "一月癸酉 閏一月壬寅 二月壬申 三月壬寅 四月辛未 五月辛丑 六月庚午 七月庚子 八月己巳 九月己亥 十月戊辰 十一月戊戌 十二月丁卯"),
    Filled((134, 2, 12), "一月丁酉 二月丙寅 三月丙申 四月乙丑 五月乙未 六月甲子 七月甲午 八月甲子 九月癸巳 十月癸亥 十一月壬辰 十二月壬戌"),
    Filled((135, 2, 1), "一月辛卯 二月辛酉 三月庚寅 四月庚申 五月己丑 六月己未 七月戊子 八月戊午 九月丁亥 閏九月丁巳 十月丁亥 十一月丙辰 十二月丙戌"),
    Filled((136, 2, 20), "一月乙卯 二月乙酉 三月甲寅 四月甲申 五月癸丑 六月癸未 七月壬子 八月壬午 九月辛亥 十月辛巳 十一月庚戌 十二月庚辰"),
    Filled((137, 2, 8), "一月己酉 二月己卯 三月己酉 四月戊寅 五月戊申 六月丁丑 七月丁未 八月丙子 九月丙午 十月乙亥 十一月乙巳 十二月甲戌"),
    Filled((138, 1, 29), "一月甲辰 二月癸酉 三月癸卯 四月壬申 五月壬寅 六月壬申 閏六月辛丑 七月辛未 八月庚子 九月庚午 十月己亥 十一月己巳 十二月戊戌"),
    Filled((139, 2, 17), "一月戊辰 二月丁酉 三月丁卯 四月丙申 五月丙寅 六月乙未 七月乙丑 八月甲午 九月甲子 十月甲午 十一月癸亥 十二月癸巳"),
    Filled((140, 2, 6), "一月壬戌 二月壬辰 三月辛酉 四月辛卯 五月庚申 六月庚寅 七月己未 八月己丑 九月戊午 十月戊子 十一月丁巳 十二月丁亥"),
    Filled((141, 1, 25), "一月丙辰 二月丙戌 閏二月丙辰 三月乙酉 四月乙卯 五月甲申 六月甲寅 七月癸未 八月癸丑 九月壬午 十月壬子 十一月辛巳 十二月辛亥"),
    Filled((142, 2, 13), "一月庚辰 二月庚戌 三月己卯 四月己酉 五月己卯 六月戊申 七月戊寅 八月丁未 九月丁丑 十月丙午 十一月丙子 十二月乙巳"),
    Filled((143, 2, 3), "一月乙亥 二月甲辰 三月甲戌 四月癸卯 五月癸酉 六月壬寅 七月壬申 八月辛丑 九月辛未 十月辛丑 十一月庚午 閏十一月庚子 十二月己巳"),
    Filled((144, 2, 22), "一月己亥 二月戊辰 三月戊戌 四月丁卯 五月丁酉 六月丙寅 七月丙申 八月乙丑 九月乙未 十月甲子 十一月甲午 十二月癸亥"),
    Filled((145, 2, 10), "一月癸巳 二月癸亥 三月壬辰 四月壬戌 五月辛卯 六月辛酉 七月庚寅 八月庚申 九月己丑 十月己未 十一月戊子 十二月戊午"),
    Filled((146, 1, 30), "一月丁亥 二月丁巳 三月丙戌 四月丙辰 五月丙戌 六月乙卯 七月乙酉 閏七月甲寅 八月甲申 九月癸丑 十月癸未 十一月壬子 十二月壬午"),
    Filled((147, 2, 18), "一月辛亥 二月辛巳 三月庚戌 四月庚辰 五月己酉 六月己卯 七月戊申 八月戊寅 九月戊申 十月丁丑 十一月丁未 十二月丙子"),
    Filled((148, 2, 8), "一月丙午 二月乙亥 三月乙巳 四月甲戌 五月甲辰 六月癸酉 七月癸卯 八月壬申 九月壬寅 十月辛未 十一月辛丑 十二月辛未"),
    Filled((149, 1, 27), "一月庚子 二月庚午 三月己亥 四月己巳 閏四月戊戌 五月戊辰 六月丁酉 七月丁卯 八月丙申 九月丙寅 十月乙未 十一月乙丑 十二月甲午"),
    Filled((150, 2, 15), "一月甲子 二月癸巳 三月癸亥 四月癸巳 五月壬戌 六月壬辰 七月辛酉 八月辛卯 九月庚申 十月庚寅 十一月己未 十二月己丑"),
    Filled((151, 2, 4), "一月戊午 二月戊子 三月丁巳 四月丁亥 五月丙辰 六月丙戌 七月乙卯 八月乙酉 九月乙卯 十月甲申 十一月甲寅 十二月癸未"),
    Filled((152, 1, 25), "一月癸丑 閏一月壬午 二月壬子 三月辛巳 四月辛亥 五月庚辰 六月庚戌 七月己卯 八月己酉 九月戊寅 十月戊申 十一月戊寅 十二月丁未"),
    Filled((153, 2, 12), "一月丁丑 二月丙午 三月丙子 四月乙巳 五月乙亥 六月甲辰 七月甲戌 八月癸卯 九月癸酉 十月壬寅 十一月壬申 十二月辛丑"),
    Filled((154, 2, 1), "一月辛未 二月庚子 三月庚午 四月庚子 五月己巳 六月己亥 七月戊辰 八月戊戌 九月丁卯 閏九月丁酉 十月丙寅 十一月丙申 十二月乙丑"),
    Filled((155, 2, 20), "一月乙未 二月甲子 三月甲午 四月癸亥 五月癸巳 六月癸亥 七月壬辰 八月壬戌 九月辛卯 十月辛酉 十一月庚寅 十二月庚申"),
    Filled((156, 2, 9), "一月己丑 二月己未 三月戊子 四月戊午 五月丁亥 六月丁巳 七月丙戌 八月丙辰 九月乙酉 十月乙卯 十一月乙酉 十二月甲寅"),
    Filled((157, 1, 29), "一月甲申 二月癸丑 三月癸未 四月壬子 五月壬午 六月辛亥 閏六月辛巳 七月庚戌 八月庚辰 九月己酉 十月己卯 十一月戊申 十二月戊寅"),
    Filled((158, 2, 16), "一月丁未 二月丁丑 三月丁未 四月丙子 五月丙午 六月乙亥 七月乙巳 八月甲戌 九月甲辰 十月癸酉 十一月癸卯 十二月壬申"),
    Filled((159, 2, 6), "一月壬寅 二月辛未 三月辛丑 四月庚午 五月庚子 六月庚午 七月己亥 八月己巳 九月戊戌 十月戊辰 十一月丁酉 十二月丁卯"),
    Filled((160, 1, 26), "一月丙申 二月丙寅 閏二月乙未 三月乙丑 四月甲午 五月甲子 六月癸巳 七月癸亥 八月壬辰 九月壬戌 十月壬辰 十一月辛酉 十二月辛卯"),
    Filled((161, 2, 13), "一月庚申 二月庚寅 三月己未 四月己丑 五月戊午 六月戊子 七月丁巳 八月丁亥 九月丙辰 十月丙戌 十一月乙卯 十二月乙酉"),
    Filled((162, 2, 3), "一月乙卯 二月甲申 三月甲寅 四月癸未 五月癸丑 六月壬午 七月壬子 八月辛巳 九月辛亥 十月庚辰 十一月庚戌 閏十一月己卯 十二月己酉"),
    Filled((163, 2, 21), "一月戊寅 二月戊申 三月丁丑 四月丁未 五月丁丑 六月丙午 七月丙子 八月乙巳 九月乙亥 十月甲辰 十一月甲戌 十二月癸卯"),
    Filled((164, 2, 11), "一月癸酉 二月壬寅 三月壬申 四月辛丑 五月辛未 六月庚子 七月庚午 八月己亥 九月己巳 十月己亥 十一月戊辰 十二月戊戌"),
    Filled((165, 1, 30), "一月丁卯 二月丁酉 三月丙寅 四月丙申 五月乙丑 六月乙未 七月甲子 閏七月甲午 八月癸亥 九月癸巳 十月壬戌 十一月壬辰 十二月壬戌"),
    Filled((166, 2, 18), "一月辛卯 二月辛酉 三月庚寅 四月庚申 五月己丑 六月己未 七月戊子 八月戊午 九月丁亥 十月丁巳 十一月丙戌 十二月丙辰"),
    Filled((167, 2, 7), "一月乙酉 二月乙卯 三月甲申 四月甲寅 五月甲申 六月癸丑 七月癸未 八月壬子 九月壬午 十月辛亥 十一月辛巳 十二月庚戌"),
    Filled((168, 1, 28), "一月庚辰 二月己酉 三月己卯 四月戊申 閏四月戊寅 五月丁未 六月丁丑 七月丁未 八月丙子 九月丙午 十月乙亥 十一月乙巳 十二月甲戌"),
    Filled((169, 2, 15), "一月甲辰 二月癸酉 三月癸卯 四月壬申 五月壬寅 六月辛未 七月辛丑 八月庚午 九月庚子 十月己巳 十一月己亥 十二月己巳"),
    Filled((170, 2, 4), "一月戊戌 二月戊辰 三月丁酉 四月丁卯 五月丙申 六月丙寅 七月乙未 八月乙丑 九月甲午 十月甲子 十一月癸巳 十二月癸亥"),
    Filled((171, 1, 24), "一月壬辰 閏一月壬戌 二月辛卯 三月辛酉 四月辛卯 五月庚申 六月庚寅 七月己未 八月己丑 九月戊午 十月戊子 十一月丁巳 十二月丁亥"),
    Filled((172, 2, 12), "一月丙辰 二月丙戌 三月乙卯 四月乙酉 五月甲寅 六月甲申 七月甲寅 八月癸未 九月癸丑 十月壬午 十一月壬子 十二月辛巳"),
    Filled((173, 2, 1), "一月辛亥 二月庚辰 三月庚戌 四月己卯 五月己酉 六月戊寅 七月戊申 八月丁丑 九月丁未 閏九月丙子 十月丙午 十一月丙子 十二月乙巳"),
    Filled((174, 2, 20), "一月乙亥 二月甲辰 三月甲戌 四月癸卯 五月癸酉 六月壬寅 七月壬申 八月辛丑 九月辛未 十月庚子 十一月庚午 十二月己亥"),
    Filled((175, 2, 9), "一月己巳 二月己亥 三月戊辰 四月戊戌 五月丁卯 六月丁酉 七月丙寅 八月丙申 九月乙丑 十月乙未 十一月甲子 十二月甲午"),
    Filled((176, 1, 29), "一月癸亥 二月癸巳 三月壬戌 四月壬辰 五月辛酉 六月辛卯 閏六月辛酉 七月庚寅 八月庚申 九月己丑 十月己未 十一月戊子 十二月戊午"),
    Filled((177, 2, 16), "一月丁亥 二月丁巳 三月丙戌 四月丙辰 五月乙酉 六月乙卯 七月甲申 八月甲寅 九月癸未 十月癸丑 十一月癸未 十二月壬子"),
    Filled((178, 2, 6), "一月壬午 二月辛亥 三月辛巳 四月庚戌 五月庚辰 六月己酉 七月己卯 八月戊申 九月戊寅 十月丁未 十一月丁丑 十二月丙午"),
    Filled((179, 1, 26), "一月丙子 二月丙午 閏二月乙亥 三月乙巳 四月甲戌 五月甲辰 六月癸酉 七月癸卯 八月壬申 九月壬寅 十月辛未 十一月辛丑 十二月庚午"),
    Filled((180, 2, 14), "一月庚子 二月己巳 三月己亥 四月戊辰 五月戊戌 六月戊辰 七月丁酉 八月丁卯 九月丙申 十月丙寅 十一月乙未 十二月乙丑"),
    Filled((181, 2, 2), "一月甲午 二月甲子 三月癸巳 四月癸亥 五月壬辰 六月壬戌 七月辛卯 八月辛酉 九月辛卯 十月庚申 十一月庚寅 閏十一月己未 十二月己丑"),
    Filled((182, 2, 21), "一月戊午 二月戊子 三月丁巳 四月丁亥 五月丙辰 六月丙戌 七月乙卯 八月乙酉 九月甲寅 十月甲申 十一月癸丑 十二月癸未"),
    Filled((183, 2, 11), "一月癸丑 二月壬午 三月壬子 四月辛巳 五月辛亥 六月庚辰 七月庚戌 八月己卯 九月己酉 十月戊寅 十一月戊申 十二月丁丑"),
    Filled((184, 1, 31), "一月丁未 二月丙子 三月丙午 四月乙亥 五月乙巳 六月乙亥 七月甲辰 閏七月甲戌 八月癸卯 九月癸酉 十月壬寅 十一月壬申 十二月辛丑"),
    Filled((185, 2, 18), "一月辛未 二月庚子 三月庚午 四月己亥 五月己巳 六月戊戌 七月戊辰 八月戊戌 九月丁卯 十月丁酉 十一月丙寅 十二月丙申"),
    Filled((186, 2, 7), "一月乙丑 二月乙未 三月甲子 四月甲午 五月癸亥 六月癸巳 七月壬戌 八月壬辰 九月辛酉 十月辛卯 十一月庚申 十二月庚寅"),
    Filled((187, 1, 28), "一月庚申 二月己丑 三月己未 四月戊子 閏四月戊午 五月丁亥 六月丁巳 七月丙戌 八月丙辰 九月乙酉 十月乙卯 十一月甲申 十二月甲寅"),
    Filled((188, 2, 15), "一月癸未 二月癸丑 三月癸未 四月壬子 五月壬午 六月辛亥 七月辛巳 八月庚戌 九月庚辰 十月己酉 十一月己卯 十二月戊申"),
    Filled((189, 2, 4), "一月戊寅 二月丁未 三月丁丑 四月丙午 五月丙子 六月乙巳 七月乙亥 八月乙巳 九月甲戌 十月甲辰 十一月癸酉 十二月癸卯"),
    Filled((190, 1, 24), "一月壬申 閏一月壬寅 二月辛未 三月辛丑 四月庚午 五月庚子 六月己巳 七月己亥 八月戊辰 九月戊戌 十月丁卯 十一月丁酉 十二月丁卯"),
    Filled((191, 2, 12), "一月丙申 二月丙寅 三月乙未 四月乙丑 五月甲午 六月甲子 七月癸巳 八月癸亥 九月壬辰 十月壬戌 十一月辛卯 十二月辛酉"),
    Filled((192, 2, 1), "一月庚寅 二月庚申 三月庚寅 四月己未 五月己丑 六月戊午 七月戊子 八月丁巳 九月丁亥 閏九月丙辰 十月丙戌 十一月乙卯 十二月乙酉"),
    Filled((193, 2, 19), "一月甲寅 二月甲申 三月癸丑 四月癸未 五月壬子 六月壬午 七月壬子 八月辛巳 九月辛亥 十月庚辰 十一月庚戌 十二月己卯"),
    Filled((194, 2, 9), "一月己酉 二月戊寅 三月戊申 四月丁丑 五月丁未 六月丙子 七月丙午 八月乙亥 九月乙巳 十月乙亥 十一月甲辰 十二月甲戌"),
    Filled((195, 1, 29), "一月癸卯 二月癸酉 三月壬寅 四月壬申 五月辛丑 六月辛未 閏六月庚子 七月庚午 八月己亥 九月己巳 十月戊戌 十一月戊辰 十二月丁酉"),
    Filled((196, 2, 17), "一月丁卯 二月丁酉 三月丙寅 四月丙申 五月乙丑 六月乙未 七月甲子 八月甲午 九月癸亥 十月癸巳 十一月壬戌 十二月壬辰"),
    Filled((197, 2, 5), "一月辛酉 二月辛卯 三月庚申 四月庚寅 五月己未 六月己丑 七月己未 八月戊子 九月戊午 十月丁亥 十一月丁巳 十二月丙戌"),
    Filled((198, 1, 26), "一月丙辰 二月乙酉 閏二月乙卯 三月甲申 四月甲寅 五月癸未 六月癸丑 七月壬午 八月壬子 九月壬午 十月辛亥 十一月辛巳 十二月庚戌"),
    Filled((199, 2, 14), "一月庚辰 二月己酉 三月己卯 四月戊申 五月戊寅 六月丁未 七月丁丑 八月丙午 九月丙子 十月乙巳 十一月乙亥 十二月甲辰"),
    Filled((200, 2, 3), "一月甲戌 二月甲辰 三月癸酉 四月癸卯 五月壬申 六月壬寅 七月辛未 八月辛丑 九月庚午 十月庚子 十一月己巳 閏十一月己亥 十二月戊辰"),
    Filled((201, 2, 21), "一月戊戌 二月丁卯 三月丁酉 四月丁卯 五月丙申 六月丙寅 七月乙未 八月乙丑 九月甲午 十月甲子 十一月癸巳 十二月癸亥"),
    Filled((202, 2, 10), "一月壬辰 二月壬戌 三月辛卯 四月辛酉 五月庚寅 六月庚申 七月己丑 八月己未 九月己丑 十月戊午 十一月戊子 十二月丁巳"),
    Filled((203, 1, 31), "一月丁亥 二月丙辰 三月丙戌 四月乙卯 五月乙酉 六月甲寅 七月甲申 閏七月癸丑 八月癸未 九月壬子 十月壬午 十一月辛亥 十二月辛巳"),
    Filled((204, 2, 19), "一月辛亥 二月庚辰 三月庚戌 四月己卯 五月己酉 六月戊寅 七月戊申 八月丁丑 九月丁未 十月丙子 十一月丙午 十二月乙亥"),
    Filled((205, 2, 7), "一月乙巳 二月甲戌 三月甲辰 四月甲戌 五月癸卯 六月癸酉 七月壬寅 八月壬申 九月辛丑 十月辛未 十一月庚子 十二月庚午"),
    Filled((206, 1, 27), "一月己亥 二月己巳 三月戊戌 四月戊辰 閏四月丁酉 五月丁卯 六月丙申 七月丙寅 八月丙申 九月乙丑 十月乙未 十一月甲子 十二月甲午"),
    Filled((207, 2, 15), "一月癸亥 二月癸巳 三月壬戌 四月壬辰 五月辛酉 六月辛卯 七月庚申 八月庚寅 九月己未 十月己丑 十一月己未 十二月戊子"),
    Filled((208, 2, 5), "一月戊午 二月丁亥 三月丁巳 四月丙戌 五月丙辰 六月乙酉 七月乙卯 八月甲申 九月甲寅 十月癸未 十一月癸丑 十二月壬午"),
    Filled((209, 1, 24), "一月壬子 閏一月辛巳 二月辛亥 三月辛巳 四月庚戌 五月庚辰 六月己酉 七月己卯 八月戊申 九月戊寅 十月丁未 十一月丁丑 十二月丙午"),
    Filled((210, 2, 12), "一月丙子 二月乙巳 三月乙亥 四月甲辰 五月甲戌 六月癸卯 七月癸酉 八月癸卯 九月壬申 十月壬寅 十一月辛未 十二月辛丑"),
    Filled((211, 2, 1), "一月庚午 二月庚子 三月己巳 四月己亥 五月戊辰 六月戊戌 七月丁卯 八月丁酉 九月丙寅 閏九月丙申 十月丙寅 十一月乙未 十二月乙丑"),
    Filled((212, 2, 20), "一月甲午 二月甲子 三月癸巳 四月癸亥 五月壬辰 六月壬戌 七月辛卯 八月辛酉 九月庚寅 十月庚申 十一月己丑 十二月己未"),
    Filled((213, 2, 8), "一月戊子 二月戊午 三月戊子 四月丁巳 五月丁亥 六月丙辰 七月丙戌 八月乙卯 九月乙酉 十月甲寅 十一月甲申 十二月癸丑"),
    Filled((214, 1, 29), "一月癸未 二月壬子 三月壬午 四月辛亥 五月辛巳 六月辛亥 閏六月庚辰 七月庚戌 八月己卯 九月己酉 十月戊寅 十一月戊申 十二月丁丑"),
    Filled((215, 2, 17), "一月丁未 二月丙子 三月丙午 四月乙亥 五月乙巳 六月甲戌 七月甲辰 八月癸酉 九月癸卯 十月癸酉 十一月壬寅 十二月壬申"),
    Filled((216, 2, 6), "一月辛丑 二月辛未 三月庚子 四月庚午 五月己亥 六月己巳 七月戊戌 八月戊辰 九月丁酉 十月丁卯 十一月丙申 十二月丙寅"),
    Filled((217, 1, 25), "一月乙未 二月乙丑 閏二月乙未 三月甲子 四月甲午 五月癸亥 六月癸巳 七月壬戌 八月壬辰 九月辛酉 十月辛卯 十一月庚申 十二月庚寅"),
    Filled((218, 2, 13), "一月己未 二月己丑 三月戊午 四月戊子 五月戊午 六月丁亥 七月丁巳 八月丙戌 九月丙辰 十月乙酉 十一月乙卯 十二月甲申"),
    Filled((219, 2, 3), "一月甲寅 二月癸未 三月癸丑 四月壬午 五月壬子 六月辛巳 七月辛亥 八月庚辰 九月庚戌 十月庚辰 十一月己酉 閏十一月己卯 十二月戊申"),
    Filled((220, 2, 22), "一月戊寅 二月丁未 三月丁丑 四月丙午 五月丙子 六月乙巳 七月乙亥 八月甲辰 九月甲戌 十月癸卯 十一月癸酉 十二月壬寅"),
    Filled((221, 2, 10), "一月壬申 二月壬寅 三月辛未 四月辛丑 五月庚午 六月庚子 七月己巳 八月己亥 九月戊辰 十月戊戌 十一月丁卯 十二月丁酉"),
];
